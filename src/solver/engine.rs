use std::iter;
use std::num::NonZeroUsize;

use log::{debug, info};

use crate::canonical::Canonicalizer;
use crate::channel::SolutionSink;
use crate::expression::{Expression, Number, Operator};
use crate::solver::cancel::CancelToken;
use crate::solver::config::SolverConfig;
use crate::solver::constants::OPERAND_COUNT;
use crate::solver::errors::SolverError;
use crate::solver::solution::Solution;
use crate::utils::{generate_combinations, validate_goal, validate_numbers};

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every derivation was explored
    Exhausted,
    /// The cancel token was set
    Cancelled,
    /// The sink stopped accepting solutions
    Disconnected,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls, one per working set visited
    pub nodes: u64,
    /// Operator applications skipped for a zero divisor, an inexact quotient in
    /// integer-only mode, or overflow
    pub pruned: u64,
    /// Final values equal to the goal
    pub hits: u64,
    /// Hits dropped as equivalent to an earlier solution
    pub duplicates: u64,
    /// Solutions handed to the sink
    pub emitted: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// A value in the working set together with the derivation that produced it
#[derive(Debug, Clone)]
struct Operand {
    value: Number,
    expr: Expression,
}

impl Operand {
    fn leaf(value: i64, position: usize) -> Self {
        Self {
            value: Number::from_integer(i128::from(value)),
            expr: Expression::leaf(value, position),
        }
    }
}

/// Why the recursion is unwinding early
enum Halt {
    Cancelled,
    Disconnected,
}

/// Exhaustive search for every way to reach `goal` from `numbers`.
///
/// For each subset of input positions, largest first, the working set is reduced
/// one pair at a time until a single value is left. Pairs are visited in
/// ascending position order and operators in the order `+ - * /`, so the stream
/// of solutions is identical across runs.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    goal: i64,
    numbers: [i64; OPERAND_COUNT],
    config: SolverConfig,
}

impl SearchEngine {
    /// # Errors
    ///
    /// Returns `SolverError::InvalidInput` if the goal or a number is out of range.
    pub fn new(
        goal: i64,
        numbers: [i64; OPERAND_COUNT],
        config: SolverConfig,
    ) -> Result<Self, SolverError> {
        validate_goal(goal)?;
        validate_numbers(&numbers)?;
        Ok(Self {
            goal,
            numbers,
            config,
        })
    }

    pub fn goal(&self) -> i64 {
        self.goal
    }

    pub fn numbers(&self) -> &[i64; OPERAND_COUNT] {
        &self.numbers
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs the search, handing each new solution to `sink` as it is found.
    ///
    /// Stops early, without delivering anything further, once `cancel` is set or
    /// the sink reports that its consumer is gone. Reaching the configured limit
    /// sets `cancel` itself.
    pub fn run<S: SolutionSink + ?Sized>(
        &self,
        sink: &mut S,
        cancel: &CancelToken,
    ) -> SearchReport {
        info!(
            "Searching for {} from {:?} (integer only: {}, limit: {:?})",
            self.goal, self.numbers, self.config.integer_only, self.config.limit
        );

        let mut search = Search {
            goal: Number::from_integer(i128::from(self.goal)),
            integer_only: self.config.integer_only,
            limit: self.config.limit,
            sink,
            cancel,
            seen: Canonicalizer::new(),
            stats: SearchStats::default(),
        };

        let outcome = match self.search_subsets(&mut search) {
            Ok(()) => SearchOutcome::Exhausted,
            Err(Halt::Cancelled) => SearchOutcome::Cancelled,
            Err(Halt::Disconnected) => SearchOutcome::Disconnected,
        };

        let stats = search.stats;
        info!(
            "Search {:?}: {} solutions, {} duplicates, {} nodes, {} pruned",
            outcome, stats.emitted, stats.duplicates, stats.nodes, stats.pruned
        );
        SearchReport { outcome, stats }
    }

    fn search_subsets<S: SolutionSink + ?Sized>(
        &self,
        search: &mut Search<'_, S>,
    ) -> Result<(), Halt> {
        for size in (1..=OPERAND_COUNT).rev() {
            for subset in generate_combinations(OPERAND_COUNT, size) {
                debug!("Reducing subset {:?}", subset);
                let working = subset
                    .iter()
                    .map(|&position| Operand::leaf(self.numbers[position], position))
                    .collect();
                search.reduce(working)?;
            }
        }
        Ok(())
    }
}

struct Search<'a, S: SolutionSink + ?Sized> {
    goal: Number,
    integer_only: bool,
    limit: Option<NonZeroUsize>,
    sink: &'a mut S,
    cancel: &'a CancelToken,
    seen: Canonicalizer,
    stats: SearchStats,
}

impl<S: SolutionSink + ?Sized> Search<'_, S> {
    fn reduce(&mut self, working: Vec<Operand>) -> Result<(), Halt> {
        if self.cancel.is_cancelled() {
            return Err(Halt::Cancelled);
        }
        self.stats.nodes += 1;

        if let [last] = working.as_slice() {
            if last.value == self.goal {
                self.report(&last.expr)?;
            }
            return Ok(());
        }

        for i in 0..working.len() {
            for j in (i + 1)..working.len() {
                let (a, b) = (&working[i], &working[j]);
                for op in Operator::ALL {
                    let swapped = (!op.is_commutative()).then_some((b, a));
                    for (left, right) in iter::once((a, b)).chain(swapped) {
                        match self.combine(op, left, right) {
                            Some(result) => self.reduce(replace_pair(&working, i, j, result))?,
                            None => self.stats.pruned += 1,
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn combine(&self, op: Operator, left: &Operand, right: &Operand) -> Option<Operand> {
        let value = op.apply(&left.value, &right.value).ok()?;
        if self.integer_only && op == Operator::Div && !value.is_integer() {
            return None;
        }
        Some(Operand {
            value,
            expr: Expression::binary(op, left.expr.clone(), right.expr.clone()),
        })
    }

    fn report(&mut self, expr: &Expression) -> Result<(), Halt> {
        self.stats.hits += 1;
        if !self.seen.admit(expr) {
            self.stats.duplicates += 1;
            return Ok(());
        }

        let solution = Solution::new(expr.clone());
        debug!("Found {}", solution);
        self.sink.accept(solution).map_err(|_| Halt::Disconnected)?;
        self.stats.emitted += 1;

        if let Some(limit) = self.limit
            && self.stats.emitted >= limit.get() as u64
        {
            debug!("Reached limit of {} solutions", limit);
            self.cancel.cancel();
            return Err(Halt::Cancelled);
        }
        Ok(())
    }
}

/// The working set with the pair at `i < j` replaced by `result` at `i`
fn replace_pair(working: &[Operand], i: usize, j: usize, result: Operand) -> Vec<Operand> {
    let mut next: Vec<Operand> = working
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != i && k != j)
        .map(|(_, operand)| operand.clone())
        .collect();
    next.insert(i, result);
    next
}

use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::channel::{Control, Notification, ResultChannel};
use crate::seed::{goal_for_date, numbers_for_date};
use crate::solver::cancel::CancelToken;
use crate::solver::config::SolverConfig;
use crate::solver::constants::OPERAND_COUNT;
use crate::solver::engine::{SearchEngine, SearchOutcome, SearchReport};
use crate::solver::errors::SolverError;
use crate::solver::solution::Solution;
use crate::utils::validate_date;

/// What to solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Request {
    Goal {
        goal: i64,
        numbers: [i64; OPERAND_COUNT],
    },
    /// Numbers are seeded from the date and the goal is the day of the month
    Date { year: u32, month: u32, day: u32 },
}

/// Entry point for running searches
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validates the request and prepares a search for it
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidInput` for out-of-range numbers, goals, or dates
    /// that do not exist.
    pub fn engine(&self, request: Request) -> Result<SearchEngine, SolverError> {
        match request {
            Request::Goal { goal, numbers } => SearchEngine::new(goal, numbers, self.config),
            Request::Date { year, month, day } => {
                validate_date(year, month, day)?;
                let numbers = numbers_for_date(year, month, day)?;
                let goal = goal_for_date(year, month, day);
                info!(
                    "Puzzle for {}-{:02}-{:02}: goal {}, numbers {:?}",
                    year, month, day, goal, numbers
                );
                SearchEngine::new(goal, numbers, self.config)
            }
        }
    }

    /// Runs a search to completion on the calling thread
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid.
    pub fn collect(&self, request: Request) -> Result<Vec<Solution>, SolverError> {
        let engine = self.engine(request)?;
        let mut solutions = Vec::new();
        engine.run(&mut solutions, &CancelToken::new());
        Ok(solutions)
    }

    /// Starts a search on a worker thread and returns its notification stream
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or the thread cannot be started.
    pub fn spawn(&self, request: Request) -> Result<SolveHandle, SolverError> {
        let engine = self.engine(request)?;
        spawn_engine(engine)
    }
}

fn spawn_engine(engine: SearchEngine) -> Result<SolveHandle, SolverError> {
    let (channel, receiver) = ResultChannel::unbounded();
    let cancel = CancelToken::new();
    let token = cancel.clone();
    let goal = engine.goal();
    let numbers = *engine.numbers();

    let worker = thread::Builder::new()
        .name("dateo-search".to_string())
        .spawn(move || {
            let mut channel = channel;
            let report = engine.run(&mut channel, &token);
            if report.outcome == SearchOutcome::Exhausted
                && let Err(e) = channel.finish()
            {
                debug!("Could not deliver completion: {}", e);
            }
            report
        })
        .map_err(SolverError::Spawn)?;

    Ok(SolveHandle {
        goal,
        numbers,
        receiver,
        cancel,
        worker,
    })
}

/// A search running on a worker thread.
///
/// The stream ends with `Notification::Done` when the search is exhausted. A
/// cancelled search sends nothing further and closes the stream without `Done`.
#[derive(Debug)]
pub struct SolveHandle {
    goal: i64,
    numbers: [i64; OPERAND_COUNT],
    receiver: Receiver<Notification>,
    cancel: CancelToken,
    worker: JoinHandle<SearchReport>,
}

impl SolveHandle {
    pub fn goal(&self) -> i64 {
        self.goal
    }

    pub fn numbers(&self) -> &[i64; OPERAND_COUNT] {
        &self.numbers
    }

    pub fn receiver(&self) -> &Receiver<Notification> {
        &self.receiver
    }

    /// Blocking iterator over notifications, ending when the stream closes
    pub fn notifications(&self) -> crossbeam_channel::Iter<'_, Notification> {
        self.receiver.iter()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Waits for the worker thread to stop
    ///
    /// # Errors
    ///
    /// Returns `SolverError::WorkerPanicked` if the search thread panicked.
    pub fn join(self) -> Result<SearchReport, SolverError> {
        self.worker.join().map_err(|_| SolverError::WorkerPanicked)
    }
}

/// Keeps at most one search in flight: starting a new one cancels the previous
/// one and waits for it to stop.
#[derive(Debug, Default)]
pub struct Session {
    solver: Solver,
    active: Option<SolveHandle>,
}

impl Session {
    pub fn new(solver: Solver) -> Self {
        Self {
            solver,
            active: None,
        }
    }

    /// Starts solving `request`. An invalid request is rejected before the
    /// search in flight is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or the worker cannot start.
    pub fn start(&mut self, request: Request) -> Result<Receiver<Notification>, SolverError> {
        let engine = self.solver.engine(request)?;
        if let Some(report) = self.stop_active() {
            debug!("Replaced search ended as {:?}", report.outcome);
        }
        let handle = spawn_engine(engine)?;
        let receiver = handle.receiver().clone();
        self.active = Some(handle);
        Ok(receiver)
    }

    /// Handles a control message, returning the report of the search it stopped
    pub fn control(&mut self, control: Control) -> Option<SearchReport> {
        match control {
            Control::Cancel => self.stop_active(),
        }
    }

    pub fn is_searching(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Waits for the search in flight to end on its own
    ///
    /// # Errors
    ///
    /// Returns `SolverError::WorkerPanicked` if the search thread panicked.
    pub fn wait(&mut self) -> Result<Option<SearchReport>, SolverError> {
        self.active.take().map(SolveHandle::join).transpose()
    }

    fn stop_active(&mut self) -> Option<SearchReport> {
        let handle = self.active.take()?;
        handle.cancel();
        match handle.join() {
            Ok(report) => Some(report),
            Err(e) => {
                warn!("Stopping search failed: {}", e);
                None
            }
        }
    }
}

use log::trace;

/// All `size`-element subsets of `0..count`, each ascending, in lexicographic order
pub fn generate_combinations(count: usize, size: usize) -> Vec<Vec<usize>> {
    fn extend(
        start: usize,
        count: usize,
        size: usize,
        current: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if current.len() == size {
            out.push(current.clone());
            return;
        }
        let remaining = size - current.len();
        for index in start..=count.saturating_sub(remaining) {
            current.push(index);
            extend(index + 1, count, size, current, out);
            current.pop();
        }
    }

    let mut result = Vec::new();
    if size <= count {
        extend(0, count, size, &mut Vec::with_capacity(size), &mut result);
    }

    trace!(
        "Generated {} combinations of {} from {}",
        result.len(),
        size,
        count
    );
    result
}

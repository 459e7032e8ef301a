/// Jacobsthal numbers `J(0), J(1), ...` with `J(n) = J(n-1) + 2 J(n-2)`.
///
/// Yields `0, 1, 1, 3, 5, 11, 21, 43, ...` and stops before the first value
/// that does not fit in `usize`.
#[derive(Clone, Debug)]
pub struct Jacobsthal {
    current: Option<usize>,
    following: Option<usize>,
}

impl Jacobsthal {
    pub fn new() -> Self {
        Self {
            current: Some(0),
            following: Some(1),
        }
    }
}

impl Default for Jacobsthal {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Jacobsthal {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        let after = self
            .following
            .and_then(|f| current.checked_mul(2).and_then(|d| f.checked_add(d)));
        self.current = self.following;
        self.following = after;
        Some(current)
    }
}

/// Returns `J(n)`, or `None` once it overflows `usize`.
pub fn jacobsthal(n: usize) -> Option<usize> {
    Jacobsthal::new().nth(n)
}

/// Lists every value in `(start, end]`, cut into groups at the Jacobsthal
/// numbers `J(3), J(4), ...` (clamped to `end`) with each group descending.
fn descending_groups(start: usize, end: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(end.saturating_sub(start));
    let mut left = start;
    for boundary in Jacobsthal::new().skip(3) {
        if left >= end {
            break;
        }
        let right = boundary.min(end);
        if right > left {
            order.extend((left + 1..=right).rev());
            left = right;
        }
    }
    if left < end {
        order.extend((left + 1..=end).rev());
    }
    order
}

/// Order in which pend indices `1..=remaining` are inserted.
///
/// Groups end at `3, 5, 11, 21, ...` (the last one capped at `remaining`) and
/// are visited high index first: `3 2 1 5 4 11 10 9 8 7 6 ...`.
pub fn insertion_plan(remaining: usize) -> Vec<usize> {
    descending_groups(0, remaining)
}

/// Classic Ford-Johnson order over `count` pending elements, where pending
/// index `i` is the element Knuth numbers `b_{i+2}`.
///
/// Group boundaries on the `b` numbering are `1, 3, 5, 11, 21, ...`, so the
/// order starts `b3 b2 b5 b4 b11 ... b6`, i.e. `1 0 3 2 9 ... 4`.
pub(crate) fn ford_johnson_order(count: usize) -> Vec<usize> {
    descending_groups(1, count + 1)
        .into_iter()
        .map(|b| b - 2)
        .collect()
}

use crate::InsertableSequence;

/// Returns the first position in `chain[..end]` whose element is not less than
/// `value`. Equal elements already in the chain stay to the right.
#[inline]
pub fn lower_bound_by<S, F>(chain: &S, end: usize, value: &S::Item, is_less: &mut F) -> usize
where
    S: InsertableSequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    assert!(end <= chain.len(), "search end {end} past chain of {}", chain.len());

    let mut left = 0usize;
    let mut right = end;
    while left < right {
        let mid = left + ((right - left) >> 1);
        let Some(probe) = chain.get(mid) else {
            unreachable!("mid {mid} < end {end} <= len");
        };
        if is_less(probe, value) {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}

/// Binary-searches the whole chain and inserts `value` at its lower bound.
#[inline]
pub fn bounded_insert_by<S, F>(chain: &mut S, value: S::Item, is_less: &mut F)
where
    S: InsertableSequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let pos = lower_bound_by(chain, chain.len(), &value, is_less);
    chain.insert(pos, value);
}

/// Straight insertion sort, building `S` one item at a time.
///
/// Each new item is compared against the sorted tail from right to left until
/// it is no longer smaller, so equal items keep their input order.
pub fn insertion_sort_into<S, I, F>(items: I, is_less: &mut F) -> S
where
    S: InsertableSequence,
    I: ExactSizeIterator<Item = S::Item>,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut sorted = S::with_capacity(items.len());
    for key in items {
        let mut j = sorted.len();
        while j > 0 {
            match sorted.get(j - 1) {
                Some(prev) if is_less(&key, prev) => j -= 1,
                _ => break,
            }
        }
        sorted.insert(j, key);
    }
    sorted
}

#[inline]
pub fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

use crate::InsertableSequence;

use super::pairs::Pair;

/// Splits pairs sorted by `high` into the main chain and the pend list.
///
/// The chain holds every `high` in order, then `pend[0]` is put in front of it
/// without a comparison: it is bounded by `pairs[0].high`, the chain minimum.
/// The returned pend keeps one slot per pair; slot 0 is already empty.
pub fn build_chain<S, T>(pairs: Vec<Pair<T>>, spare: usize) -> (S, Vec<Option<T>>)
where
    S: InsertableSequence<Item = T>,
{
    let mut chain = S::with_capacity(2 * pairs.len() + spare);
    let mut pend = Vec::with_capacity(pairs.len());
    for Pair { low, high } in pairs {
        chain.push_back(high);
        pend.push(Some(low));
    }
    if let Some(first) = pend.first_mut().and_then(Option::take) {
        chain.push_front(first);
    }
    (chain, pend)
}

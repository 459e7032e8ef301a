use tracing::trace;

use crate::InsertableSequence;

use super::chain::build_chain;
use super::common::{ceil_log2, lower_bound_by};
use super::jacobsthal::ford_johnson_order;
use super::pairs::form_pairs;

/// Full Ford-Johnson merge-insertion.
///
/// Unlike the flat variant, the larger member of every pair is sorted by
/// recursing, the straggler joins the pend elements in Jacobsthal order, and
/// every binary search stops at the element's partner in the chain. The worst
/// case is exactly [`ford_johnson_bound`] comparisons.
pub fn sort<S, T, F>(items: Vec<T>, is_less: &mut F) -> S
where
    S: InsertableSequence<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    let ranks = merge_insert((0..len).collect(), &mut |a: &usize, b: &usize| {
        is_less(&items[*a], &items[*b])
    });

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut sorted = S::with_capacity(len);
    for rank in ranks {
        if let Some(item) = slots[rank].take() {
            sorted.push_back(item);
        }
    }
    sorted
}

/// Worst-case comparison count of Ford-Johnson on `n` elements:
/// `sum_{k=1..n} ceil(log2(3k/4))`.
pub fn ford_johnson_bound(n: usize) -> usize {
    // ceil(log2(3k/4)) == max(ceil(log2(3k)) - 2, 0)
    (1..=n).map(|k| ceil_log2(3 * k).saturating_sub(2)).sum()
}

/// Sorts distinct element ids; `less` compares the elements behind two ids.
fn merge_insert<F>(ids: Vec<usize>, less: &mut F) -> Vec<usize>
where
    F: FnMut(&usize, &usize) -> bool,
{
    let id_space = match ids.iter().copied().max() {
        Some(max) if ids.len() > 1 => max + 1,
        _ => return ids,
    };

    let (mut pairs, straggler) = form_pairs(ids, less);
    let highs = pairs.iter().map(|pair| pair.high).collect();
    let sorted_highs = merge_insert(highs, less);
    trace!(pairs = pairs.len(), straggler = straggler.is_some(), "highs sorted recursively");

    // Ids are distinct, so the recursive result fixes the pair order without
    // further comparisons.
    let mut rank = vec![0usize; id_space];
    for (r, &high) in sorted_highs.iter().enumerate() {
        rank[high] = r;
    }
    pairs.sort_unstable_by_key(|pair| rank[pair.high]);

    let (mut chain, pend): (Vec<usize>, _) =
        build_chain(pairs, usize::from(straggler.is_some()));

    // Each pend element must land in front of its own high; the straggler has
    // no such bound.
    let mut pending: Vec<(usize, Option<usize>)> = pend
        .into_iter()
        .zip(&sorted_highs)
        .filter_map(|(low, &high)| low.map(|low| (low, Some(high))))
        .collect();
    pending.extend(straggler.map(|s| (s, None)));

    for index in ford_johnson_order(pending.len()) {
        let (element, bound) = pending[index];
        let end = bound
            .and_then(|high| chain.iter().position(|&id| id == high))
            .unwrap_or(chain.len());
        let pos = lower_bound_by(&chain, end, &element, less);
        chain.insert(pos, element);
    }

    chain
}

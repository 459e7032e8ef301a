use tracing::trace;

use crate::{InsertableSequence, MergeInsertionParams};

use super::chain::build_chain;
use super::common::{bounded_insert_by, insertion_sort_into};
use super::jacobsthal::insertion_plan;
use super::pairs::{form_pairs, sort_pairs_by_high};

/// Single-level merge-insertion: pair, sort pairs by `high`, build the chain,
/// then binary-insert the pend list in Jacobsthal order and the straggler last.
///
/// Inputs no longer than `params.insertion_threshold` go straight to
/// insertion sort.
pub fn sort<S, T, F>(items: Vec<T>, is_less: &mut F, params: &MergeInsertionParams) -> S
where
    S: InsertableSequence<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    if len <= 1 || len <= params.insertion_threshold {
        return insertion_sort_into(items.into_iter(), is_less);
    }

    let (mut pairs, straggler) = form_pairs(items, is_less);
    sort_pairs_by_high(&mut pairs, is_less);
    trace!(len, pairs = pairs.len(), straggler = straggler.is_some(), "pairs sorted by high");

    let (mut chain, mut pend): (S, _) = build_chain(pairs, usize::from(straggler.is_some()));
    let plan = insertion_plan(pend.len().saturating_sub(1));
    trace!(chain = chain.len(), plan = plan.len(), "inserting pend elements");

    for index in plan {
        if let Some(value) = pend.get_mut(index).and_then(Option::take) {
            bounded_insert_by(&mut chain, value, is_less);
        }
    }
    if let Some(value) = straggler {
        bounded_insert_by(&mut chain, value, is_less);
    }

    debug_assert_eq!(chain.len(), len);
    chain
}

//! Comparison-minimizing merge-insertion ("Ford-Johnson") sort.
//!
//! [`sort`] and [`sort_by`] run the single-level variant: adjacent elements are
//! paired, pairs are ordered by their larger member, and the smaller members
//! are binary-inserted into that chain in Jacobsthal group order. Short inputs
//! fall back to straight insertion sort. [`Variant::Recursive`] is the full
//! Ford-Johnson procedure.
//!
//! Nothing here counts comparisons or measures time; wrap the comparator
//! passed to [`sort_by`] to do that.

mod algorithms;
mod sequence;

pub use algorithms::common::{bounded_insert_by, lower_bound_by};
pub use algorithms::jacobsthal::{Jacobsthal, insertion_plan, jacobsthal};
pub use algorithms::pairs::{Pair, form_pairs, sort_pairs_by_high};
pub use algorithms::recursive::ford_johnson_bound;
pub use sequence::InsertableSequence;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Variant {
    /// Pairs sorted by a flat insertion sort, full-chain lower-bound inserts.
    Flat,
    /// Pairs sorted by recursion, searches bounded by each element's partner.
    Recursive,
}

pub const ALL_VARIANTS: [Variant; 2] = [Variant::Flat, Variant::Recursive];

pub fn all_variants() -> &'static [Variant] {
    &ALL_VARIANTS
}

pub fn variant_name(variant: Variant) -> &'static str {
    match variant {
        Variant::Flat => "merge_insertion_flat",
        Variant::Recursive => "merge_insertion_recursive",
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MergeInsertionParams {
    /// Inputs of at most this many elements are insertion-sorted directly.
    pub insertion_threshold: usize,
}

pub const DEFAULT_PARAMS: MergeInsertionParams = MergeInsertionParams {
    insertion_threshold: 10,
};

impl Default for MergeInsertionParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

/// Sorts `items` in non-descending order.
#[must_use]
pub fn sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    sort_by(items, |a, b| a < b)
}

/// Sorts `items` with `is_less` as the strict "comes before" relation.
///
/// `is_less` must be a strict weak ordering. If it panics, the panic
/// propagates and the partially sorted items are dropped.
#[must_use]
pub fn sort_by<T, F>(items: Vec<T>, is_less: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    sort_with_params_by(items, is_less, &DEFAULT_PARAMS)
}

#[must_use]
pub fn sort_with_params_by<T, F>(items: Vec<T>, is_less: F, params: &MergeInsertionParams) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    sort_into::<Vec<T>, T, F>(items, is_less, params)
}

/// Runs the flat variant with the main chain stored in `S`.
pub fn sort_into<S, T, F>(items: Vec<T>, mut is_less: F, params: &MergeInsertionParams) -> S
where
    S: InsertableSequence<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    algorithms::flat::sort(items, &mut is_less, params)
}

/// Dispatches to either variant; `params` only affects [`Variant::Flat`].
pub fn sort_variant_into<S, T, F>(
    variant: Variant,
    items: Vec<T>,
    mut is_less: F,
    params: &MergeInsertionParams,
) -> S
where
    S: InsertableSequence<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    match variant {
        Variant::Flat => algorithms::flat::sort(items, &mut is_less, params),
        Variant::Recursive => algorithms::recursive::sort(items, &mut is_less),
    }
}

#[must_use]
pub fn sort_variant_by<T, F>(variant: Variant, items: Vec<T>, is_less: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    sort_variant_into::<Vec<T>, T, F>(variant, items, is_less, &DEFAULT_PARAMS)
}

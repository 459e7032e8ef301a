/// Two adjacent input elements, ordered so that `!(high < low)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pair<T> {
    pub low: T,
    pub high: T,
}

/// Consumes `items` two at a time, spending one comparison per pair.
///
/// Returns the pairs in input order and the unpaired last element when the
/// length is odd. When the two members compare equal the first stays `low`.
pub fn form_pairs<T, I, F>(items: I, is_less: &mut F) -> (Vec<Pair<T>>, Option<T>)
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut items = items.into_iter();
    let mut pairs = Vec::with_capacity(items.size_hint().0 / 2);
    while let Some(first) = items.next() {
        let Some(second) = items.next() else {
            return (pairs, Some(first));
        };
        pairs.push(if is_less(&second, &first) {
            Pair {
                low: second,
                high: first,
            }
        } else {
            Pair {
                low: first,
                high: second,
            }
        });
    }
    (pairs, None)
}

/// Stable insertion sort of `pairs` by `high`.
///
/// The scan for each pair stops at the first `high` that is not greater, so
/// pairs with equal `high` keep their relative order.
pub fn sort_pairs_by_high<T, F>(pairs: &mut [Pair<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..pairs.len() {
        let mut j = i;
        while j > 0 && is_less(&pairs[i].high, &pairs[j - 1].high) {
            j -= 1;
        }
        if j < i {
            pairs[j..=i].rotate_right(1);
        }
    }
}

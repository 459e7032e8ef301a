use std::collections::VecDeque;

/// An ordered sequence that supports positional reads and inserts.
///
/// The main chain is written against this trait only, so the same algorithm
/// can be measured over different backings.
pub trait InsertableSequence {
    type Item;

    fn with_capacity(capacity: usize) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Inserts `item` so that it ends up at `index`, shifting later items right.
    ///
    /// `index` must be at most `len()`.
    fn insert(&mut self, index: usize, item: Self::Item);

    fn push_back(&mut self, item: Self::Item) {
        let index = self.len();
        self.insert(index, item);
    }

    fn push_front(&mut self, item: Self::Item) {
        self.insert(0, item);
    }

    fn into_vec(self) -> Vec<Self::Item>;
}

impl<T> InsertableSequence for Vec<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn insert(&mut self, index: usize, item: T) {
        Vec::insert(self, index, item);
    }

    fn push_back(&mut self, item: T) {
        self.push(item);
    }

    fn into_vec(self) -> Vec<T> {
        self
    }
}

impl<T> InsertableSequence for VecDeque<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn insert(&mut self, index: usize, item: T) {
        VecDeque::insert(self, index, item);
    }

    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }

    // O(1) here, unlike `Vec`.
    fn push_front(&mut self, item: T) {
        VecDeque::push_front(self, item);
    }

    fn into_vec(self) -> Vec<T> {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<S: InsertableSequence<Item = i32>>() -> Vec<i32> {
        let mut seq = S::with_capacity(4);
        assert!(seq.is_empty());
        seq.push_back(3);
        seq.push_back(5);
        seq.push_front(1);
        seq.insert(2, 4);
        seq.insert(1, 2);
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.get(0), Some(&1));
        assert_eq!(seq.get(4), Some(&5));
        assert_eq!(seq.get(5), None);
        seq.into_vec()
    }

    #[test]
    fn backings_agree() {
        assert_eq!(exercise::<Vec<i32>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(exercise::<VecDeque<i32>>(), vec![1, 2, 3, 4, 5]);
    }
}

use super::{
    ArrayLike, Bounds, Entry, JoinText, Nested, Result,
    shape, shape_at_origin, nested_map, nested_for_each, nested_join,
    nested_fill, nested_fill_map,
    nested_includes, nested_includes_from_last, nested_index_of, nested_last_index_of,
    nested_find, nested_find_last, nested_find_index, nested_find_last_index,
    nested_some, nested_some_from_last, nested_every, nested_every_from_last,
};

/// Method-call syntax for the free functions of this crate.
///
/// Implemented for every slice of [`ArrayLike`] nodes, and so usable on a
/// `Vec` root directly. The methods take the same arguments as the
/// functions they forward to, minus the array itself.
///
/// ```
/// use nested_array::{nested, Bounds, NestedExt, Nested};
/// let mut a = nested![[0, 1, 2], [3, 4, 5]];
/// assert_eq!(a.shape(None).unwrap(), [2, 3]);
/// assert_eq!(a.nested_index_of(&Nested::Leaf(4), Bounds::default(), None).unwrap(), Some(vec![1, 1]));
/// a.nested_fill(Nested::Leaf(9), [1], Bounds::default(), None).unwrap();
/// assert_eq!(a.nested_join(&[";"], None).unwrap(), "0,1,2;9,9,9");
/// ```
pub trait NestedExt {
    /// The node type.
    type Node: ArrayLike;

    fn nodes(&self) -> &[Self::Node];

    fn nodes_mut(&mut self) -> &mut [Self::Node];

    /// See [`shape()`].
    fn shape(&self, max_depth: Option<usize>) -> Result<Vec<usize>> {
        shape(self.nodes(), max_depth)
    }

    /// See [`shape_at_origin()`].
    fn shape_at_origin(&self, max_depth: Option<usize>) -> Result<Vec<usize>> {
        shape_at_origin(self.nodes(), max_depth)
    }

    /// See [`nested_map()`].
    fn nested_map<U>(
        &self,
        f: impl FnMut(Entry<'_, Self::Node>) -> U,
        max_depth: Option<usize>,
    ) -> Result<Vec<Nested<U>>> {
        nested_map(self.nodes(), f, max_depth)
    }

    /// See [`nested_for_each()`].
    fn nested_for_each(
        &self,
        f: impl FnMut(Entry<'_, Self::Node>),
        max_depth: Option<usize>,
    ) -> Result<()> {
        nested_for_each(self.nodes(), f, max_depth)
    }

    /// See [`nested_join()`].
    fn nested_join<S: AsRef<str>>(&self, separators: &[S], max_depth: Option<usize>) -> Result<String>
    where Self::Node: JoinText {
        nested_join(separators, self.nodes(), max_depth)
    }

    /// See [`nested_fill()`].
    fn nested_fill(
        &mut self,
        value: Self::Node,
        start: impl Into<Bounds>,
        end: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<&mut [Self::Node]> where Self::Node: Clone {
        nested_fill(self.nodes_mut(), value, start, end, max_depth)
    }

    /// See [`nested_fill_map()`].
    fn nested_fill_map(
        &mut self,
        f: impl FnMut(&Self::Node, &[usize]) -> Self::Node,
        start: impl Into<Bounds>,
        end: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<&mut [Self::Node]> {
        nested_fill_map(self.nodes_mut(), f, start, end, max_depth)
    }

    /// See [`nested_includes()`].
    fn nested_includes(
        &self,
        element: &Self::Node,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<bool> where Self::Node: PartialEq {
        nested_includes(self.nodes(), element, from, max_depth)
    }

    /// See [`nested_includes_from_last()`].
    fn nested_includes_from_last(
        &self,
        element: &Self::Node,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<bool> where Self::Node: PartialEq {
        nested_includes_from_last(self.nodes(), element, from, max_depth)
    }

    /// See [`nested_index_of()`].
    fn nested_index_of(
        &self,
        element: &Self::Node,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<Option<Vec<usize>>> where Self::Node: PartialEq {
        nested_index_of(self.nodes(), element, from, max_depth)
    }

    /// See [`nested_last_index_of()`].
    fn nested_last_index_of(
        &self,
        element: &Self::Node,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<Option<Vec<usize>>> where Self::Node: PartialEq {
        nested_last_index_of(self.nodes(), element, from, max_depth)
    }

    /// See [`nested_find()`].
    fn nested_find(
        &self,
        predicate: impl FnMut(Entry<'_, Self::Node>) -> bool,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<Option<&Self::Node>> {
        nested_find(self.nodes(), predicate, from, max_depth)
    }

    /// See [`nested_find_last()`].
    fn nested_find_last(
        &self,
        predicate: impl FnMut(Entry<'_, Self::Node>) -> bool,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<Option<&Self::Node>> {
        nested_find_last(self.nodes(), predicate, from, max_depth)
    }

    /// See [`nested_find_index()`].
    fn nested_find_index(
        &self,
        predicate: impl FnMut(Entry<'_, Self::Node>) -> bool,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<Option<Vec<usize>>> {
        nested_find_index(self.nodes(), predicate, from, max_depth)
    }

    /// See [`nested_find_last_index()`].
    fn nested_find_last_index(
        &self,
        predicate: impl FnMut(Entry<'_, Self::Node>) -> bool,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<Option<Vec<usize>>> {
        nested_find_last_index(self.nodes(), predicate, from, max_depth)
    }

    /// See [`nested_some()`].
    fn nested_some(
        &self,
        predicate: impl FnMut(Entry<'_, Self::Node>) -> bool,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<bool> {
        nested_some(self.nodes(), predicate, from, max_depth)
    }

    /// See [`nested_some_from_last()`].
    fn nested_some_from_last(
        &self,
        predicate: impl FnMut(Entry<'_, Self::Node>) -> bool,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<bool> {
        nested_some_from_last(self.nodes(), predicate, from, max_depth)
    }

    /// See [`nested_every()`].
    fn nested_every(
        &self,
        predicate: impl FnMut(Entry<'_, Self::Node>) -> bool,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<bool> {
        nested_every(self.nodes(), predicate, from, max_depth)
    }

    /// See [`nested_every_from_last()`].
    fn nested_every_from_last(
        &self,
        predicate: impl FnMut(Entry<'_, Self::Node>) -> bool,
        from: impl Into<Bounds>,
        max_depth: Option<usize>,
    ) -> Result<bool> {
        nested_every_from_last(self.nodes(), predicate, from, max_depth)
    }
}

impl<N: ArrayLike> NestedExt for [N] {
    type Node = N;

    fn nodes(&self) -> &[N] { self }

    fn nodes_mut(&mut self) -> &mut [N] { self }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_shape, nested};

    fn odd(e: Entry<'_, Nested<usize>>) -> bool { e.leaf().is_some_and(|n| n % 2 == 1) }

    #[test]
    fn methods() {
        let mut a = build_shape(&[2, 3], |i| i[0] * 3 + i[1]).unwrap();
        assert_eq!(a.shape_at_origin(None).unwrap(), [2, 3]);
        assert_eq!(a.nested_map(|e| e.index(), None).unwrap(), nested![[0, 1, 2], [0, 1, 2]]);
        let mut count = 0;
        a.nested_for_each(|_| count += 1, Some(1)).unwrap();
        assert_eq!(count, 2);

        a.nested_fill_map(|n, _| Nested::Leaf(n.leaf().unwrap() * 2), [0, 1], Bounds::default(), None).unwrap();
        assert_eq!(a, nested![[0, 2, 4], [3, 8, 10]]);
        assert!(a.nested_includes(&Nested::Leaf(8), Bounds::default(), None).unwrap());
        assert!(a.nested_includes_from_last(&Nested::Leaf(3), Bounds::default(), None).unwrap());
        assert_eq!(a.nested_last_index_of(&Nested::Leaf(4), Bounds::default(), None).unwrap(), Some(vec![0, 2]));

        assert_eq!(a.nested_find(odd, Bounds::default(), None).unwrap(), Some(&Nested::Leaf(3)));
        assert_eq!(a.nested_find_last(odd, Bounds::default(), None).unwrap(), Some(&Nested::Leaf(3)));
        assert_eq!(a.nested_find_index(odd, Bounds::default(), None).unwrap(), Some(vec![1, 0]));
        assert_eq!(a.nested_find_last_index(odd, [0], None).unwrap(), None);
        assert!(a.nested_some(odd, Bounds::default(), None).unwrap());
        assert!(a.nested_some_from_last(odd, [1, 2], None).unwrap());
        assert!(!a.nested_every(odd, Bounds::default(), None).unwrap());
        assert!(a.nested_every_from_last(|e| !odd(e), [0], None).unwrap());
    }
}

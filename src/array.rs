use std::fmt::{self, Display};

/// A node of a nested array: either an array of child nodes, or a leaf.
///
/// Nested arrays need not be regular. Siblings may have different lengths
/// and different depths:
///
/// ```
/// use nested_array::{nested, shape, shape_at_origin};
/// let a = nested![[0, 1], [2, [3, 4], 5]];
/// assert_eq!(shape(&a, None).unwrap(), [2, 3, 2]);
/// assert_eq!(shape_at_origin(&a, None).unwrap(), [2, 2]);
/// ```
///
/// The root of a nested array is a plain `Vec<Nested<T>>` (or any slice of
/// nodes); every operation in this crate takes it explicitly.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    Array(Vec<Nested<T>>),
    Leaf(T),
}

impl<T> Nested<T> {
    /// Returns the leaf value, if `self` is a leaf.
    pub fn leaf(&self) -> Option<&T> {
        match self {
            Nested::Leaf(t) => Some(t),
            Nested::Array(_) => None,
        }
    }

    /// Consumes `self`, returning the leaf value if it is a leaf.
    pub fn into_leaf(self) -> Option<T> {
        match self {
            Nested::Leaf(t) => Some(t),
            Nested::Array(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool { matches!(self, Nested::Leaf(_)) }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(children: Vec<Nested<T>>) -> Self { Nested::Array(children) }
}

/// Leaves display as themselves. Arrays display as their children separated
/// by `,`, recursively, with no brackets.
///
/// ```
/// use nested_array::{nested, Nested};
/// let a = Nested::Array(nested![1, [2, 3], []]);
/// assert_eq!(a.to_string(), "1,2,3,");
/// ```
impl<T: Display> Display for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Leaf(t) => Display::fmt(t, f),
            Nested::Array(children) => {
                for (index, child) in children.iter().enumerate() {
                    if index > 0 { f.write_str(",")?; }
                    Display::fmt(child, f)?;
                }
                Ok(())
            },
        }
    }
}

// ----------------------------------------------------------------------------

/// Implemented by node types that the traversal functions can descend into.
///
/// This is the container-likeness test applied at every step of every
/// traversal: a node whose [`as_array()`] returns `Some` is an internal node
/// (possibly with no children), and anything else is an opaque leaf,
/// whatever its own structure.
///
/// [`as_array()`]: ArrayLike::as_array()
pub trait ArrayLike: Sized {
    /// The children of `self`, if `self` is array-like.
    fn as_array(&self) -> Option<&[Self]>;

    /// Mutable access to the children of `self`, if `self` is array-like.
    fn as_array_mut(&mut self) -> Option<&mut [Self]>;

    fn is_array_like(&self) -> bool { self.as_array().is_some() }
}

impl<T> ArrayLike for Nested<T> {
    fn as_array(&self) -> Option<&[Self]> {
        match self {
            Nested::Array(children) => Some(children),
            Nested::Leaf(_) => None,
        }
    }

    fn as_array_mut(&mut self) -> Option<&mut [Self]> {
        match self {
            Nested::Array(children) => Some(children),
            Nested::Leaf(_) => None,
        }
    }
}

// ----------------------------------------------------------------------------

/// Constructs the root of a nested array from a bracketed literal.
///
/// Each element is either a bracketed list, which becomes a
/// [`Nested::Array`], or a single token tree, which becomes a
/// [`Nested::Leaf`]. Wrap longer leaf expressions in parentheses.
///
/// ```
/// use nested_array::{nested, Nested};
/// let a: Vec<Nested<i32>> = nested![[0, (-1)], []];
/// assert_eq!(a, vec![
///     Nested::Array(vec![Nested::Leaf(0), Nested::Leaf(-1)]),
///     Nested::Array(vec![]),
/// ]);
/// ```
#[macro_export]
macro_rules! nested {
    (@node [$($inner:tt)*]) => {
        $crate::Nested::Array($crate::nested![$($inner)*])
    };
    (@node $leaf:tt) => {
        $crate::Nested::Leaf($leaf)
    };
    ($($node:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@node $node)),*]
    };
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_like() {
        let a: Nested<i32> = Nested::Array(vec![]);
        assert!(a.is_array_like());
        assert_eq!(a.as_array().map(<[_]>::len), Some(0));
        assert!(!Nested::Leaf(vec![1, 2]).is_array_like());
    }

    #[test]
    fn macro_shapes() {
        let a = nested![[[], "foo"], "bar"];
        assert_eq!(a.len(), 2);
        assert_eq!(a[1], Nested::Leaf("bar"));
        let first = a[0].as_array().unwrap();
        assert_eq!(first[0], Nested::Array(vec![]));
        assert_eq!(first[1].leaf(), Some(&"foo"));
    }

    #[test]
    fn display() {
        let a = Nested::Array(nested![["a", "b"], [], [["c"]]]);
        assert_eq!(a.to_string(), "a,b,,c");
        assert_eq!(Nested::Leaf(7).to_string(), "7");
    }

    #[test]
    fn leaf_access() {
        let mut a = nested![1, [2]];
        assert_eq!(a[0].clone().into_leaf(), Some(1));
        assert_eq!(a[1].clone().into_leaf(), None);
        a[1].as_array_mut().unwrap()[0] = Nested::Leaf(5);
        assert_eq!(a, nested![1, [5]]);
    }
}

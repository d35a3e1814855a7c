//! A pure-Rust library for building, traversing and searching arbitrarily
//! nested arrays.
//!
//! A nested array is a tree with ordered children: an array whose elements
//! may themselves be arrays, to any depth, with no requirement that siblings
//! agree in length or depth. [`Nested<T>`] is the obvious representation,
//! and the [`nested!`] macro writes one down. The root of a nested array is
//! just a slice of nodes, and every function in this crate takes it
//! explicitly.
//!
//! The functions are generic over trait [`ArrayLike`], which decides which
//! nodes are arrays to descend into and which are leaves. With the `json`
//! feature, [`serde_json::Value`] is `ArrayLike` too.
//!
//! Most functions take a `max_depth`. Traversal descends through at most
//! that many axes; an array-like node found at that depth is treated as a
//! leaf. `None` means no limit, and `Some(0)` is an [`Error`].
//!
//! Searches and fills take per-axis [`Bounds`]. Bound `i` applies to every
//! node on axis `i`, so they select a box-shaped region. Negative bounds
//! count back from the end of each node.
//!
//! ```
//! use nested_array::{nested, nested_find_index, nested_map, Bounds};
//! let a = nested![[0, 1, 2], [3, 4, 5]];
//! let b = nested_map(&a, |e| e.leaf().map_or(0, |n| n * n), None).unwrap();
//! assert_eq!(b, nested![[0, 1, 4], [9, 16, 25]]);
//! let big = nested_find_index(&b, |e| e.leaf() > Some(&5), Bounds::default(), None).unwrap();
//! assert_eq!(big, Some(vec![1, 0]));
//! ```
//!
//! Trait [`NestedExt`] offers the same functions as methods.
//!
//! The crate logs through the [`log`] facade and installs no logger.

mod error;
pub use error::{Error, Result};

mod array;
pub use array::{Nested, ArrayLike};

mod index;
pub use index::{Bounds, Direction, to_valid_index, to_valid_last_index, to_valid_end_index};

mod new;
pub use new::{build_shape, build_shape_with_value, try_build_shape};

mod shape;
pub use shape::{shape, shape_at_origin};

mod view;
pub use view::{Entry, nested_map, try_nested_map, nested_for_each, try_nested_for_each};

mod split;
pub use split::{Separator, JoinText, nested_split, nested_join};

mod fill;
pub use fill::{nested_fill, nested_fill_map, try_nested_fill_map};

mod search;
pub use search::{
    Found, nested_search, try_nested_search,
    nested_includes, nested_includes_from_last, nested_index_of, nested_last_index_of,
    nested_find, nested_find_last, nested_find_index, nested_find_last_index,
    nested_some, nested_some_from_last, nested_every, nested_every_from_last,
};

mod ext;
pub use ext::{NestedExt};

#[cfg(feature = "json")]
mod json;

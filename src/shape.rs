//! Shape queries on nested arrays.
//!
//! The shape of a nested array has one entry per axis. For an irregular
//! array there is more than one reasonable answer. [`shape()`] visits every
//! node and reports the deepest branch it finds, while [`shape_at_origin()`]
//! only follows the first child at every level.

use super::{ArrayLike, Result};
use super::error::{depth_limit};

/// Merges the shape found under one child into the best shape so far.
///
/// `axis` is the entry being aggregated at this level. The candidate wins if
/// it is longer, or if it is as long and larger at `axis`.
fn better(best: Vec<usize>, candidate: Vec<usize>, axis: usize) -> Vec<usize> {
    let larger = matches!(
        (candidate.get(axis), best.get(axis)),
        (Some(c), Some(b)) if c > b
    );
    if candidate.len() > best.len() || (candidate.len() == best.len() && larger) { candidate } else { best }
}

fn deepest<N: ArrayLike>(parent: &[N], shape: Vec<usize>, depth: usize) -> Vec<usize> {
    let axis = shape.len();
    let mut best = shape.clone();
    for child in parent {
        if axis >= depth { break; }
        if let Some(children) = child.as_array() {
            let mut candidate = shape.clone();
            candidate.push(children.len());
            best = better(best, deepest(children, candidate, depth), axis);
        }
    }
    best
}

/// Returns the length of each axis of `array`, taken from the deepest
/// branch.
///
/// Every node up to `max_depth` axes is visited. When branches disagree, the
/// deeper one wins; between branches of equal depth, the one with the larger
/// length at the axis where they are compared wins. `max_depth` of `None`
/// means no limit.
///
/// Returns [`Error::InvalidDepth`] if `max_depth` is `Some(0)`.
///
/// ```
/// use nested_array::{nested, shape};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// assert_eq!(shape(&a, None).unwrap(), [2, 3]);
/// assert_eq!(shape(&a, Some(1)).unwrap(), [2]);
/// ```
///
/// [`Error::InvalidDepth`]: super::Error::InvalidDepth
pub fn shape<N: ArrayLike>(array: &[N], max_depth: Option<usize>) -> Result<Vec<usize>> {
    let depth = depth_limit(max_depth)?;
    Ok(deepest(array, vec![array.len()], depth))
}

/// Returns the length of each axis of `array`, following only the first
/// element of each axis.
///
/// This is cheap: it does not look at any sibling. For a regular array it
/// gives the same answer as [`shape()`].
///
/// ```
/// use nested_array::{nested, shape_at_origin};
/// let a = nested![[0, 1], [2, [3, 4], 5]];
/// assert_eq!(shape_at_origin(&a, None).unwrap(), [2, 2]);
/// ```
pub fn shape_at_origin<N: ArrayLike>(array: &[N], max_depth: Option<usize>) -> Result<Vec<usize>> {
    let depth = depth_limit(max_depth)?;
    let mut shape = vec![array.len()];
    let mut parent = array;
    while shape.len() < depth {
        let Some(children) = parent.first().and_then(ArrayLike::as_array) else { break };
        shape.push(children.len());
        parent = children;
    }
    Ok(shape)
}

// ----------------------------------------------------------------------------

//! Per-axis index bounds and their normalisation against a container.
//!
//! A bound is an `Option<isize>`: `None` means "no bound" (the default for
//! that direction), a negative value counts back from the end of the
//! container, in the manner of slice indices in many languages.

/// Optional per-axis indices, e.g. the `from`, `start` or `end` coordinates
/// of a search or fill.
///
/// Entry `i` constrains axis `i`. The vector need not have one entry per
/// axis: axes beyond its length, and `None` entries, use the default.
///
/// ```
/// use nested_array::Bounds;
/// let b = Bounds::from([1, -2]);
/// assert_eq!(b.get(0), Some(1));
/// assert_eq!(b.get(1), Some(-2));
/// assert_eq!(b.get(7), None);
/// assert!(Bounds::default().is_empty());
/// ```
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
pub struct Bounds(Vec<Option<isize>>);

impl Bounds {
    pub fn new(indices: impl IntoIterator<Item=Option<isize>>) -> Self {
        Self(indices.into_iter().collect())
    }

    /// The bound for `axis`, if any.
    pub fn get(&self, axis: usize) -> Option<isize> {
        self.0.get(axis).copied().flatten()
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl<const N: usize> From<[isize; N]> for Bounds {
    fn from(indices: [isize; N]) -> Self { Self::new(indices.into_iter().map(Some)) }
}

impl From<&[isize]> for Bounds {
    fn from(indices: &[isize]) -> Self { Self::new(indices.iter().copied().map(Some)) }
}

impl From<Vec<isize>> for Bounds {
    fn from(indices: Vec<isize>) -> Self { Self::new(indices.into_iter().map(Some)) }
}

impl From<Vec<Option<isize>>> for Bounds {
    fn from(indices: Vec<Option<isize>>) -> Self { Self(indices) }
}

// ----------------------------------------------------------------------------

fn signed_len<T>(container: &[T]) -> isize {
    isize::try_from(container.len()).unwrap_or(isize::MAX)
}

/// The first index of a forward scan of `container` starting at `index`.
///
/// `None` gives `0`. A negative index counts back from the end, saturating
/// at `0`. A non-negative index is returned as it is, even if it is past
/// the end.
///
/// ```
/// use nested_array::to_valid_index;
/// let c = [0; 5];
/// assert_eq!(to_valid_index(None, &c), 0);
/// assert_eq!(to_valid_index(Some(3), &c), 3);
/// assert_eq!(to_valid_index(Some(9), &c), 9);
/// assert_eq!(to_valid_index(Some(-2), &c), 3);
/// assert_eq!(to_valid_index(Some(-9), &c), 0);
/// ```
pub fn to_valid_index<T>(index: Option<isize>, container: &[T]) -> usize {
    match index {
        None => 0,
        Some(i) if i >= 0 => i.unsigned_abs(),
        Some(i) => (signed_len(container) + i).max(0).unsigned_abs(),
    }
}

/// The first index of a backward scan of `container` starting at `index`.
///
/// `None` gives `len - 1`. A non-negative index is clamped to `len - 1`. A
/// negative index counts back from the end and is not clamped, so the
/// result may be below `-1`. Any negative result makes the scan empty.
///
/// ```
/// use nested_array::to_valid_last_index;
/// let c = [0; 5];
/// assert_eq!(to_valid_last_index(None, &c), 4);
/// assert_eq!(to_valid_last_index(Some(2), &c), 2);
/// assert_eq!(to_valid_last_index(Some(9), &c), 4);
/// assert_eq!(to_valid_last_index(Some(-1), &c), 4);
/// assert_eq!(to_valid_last_index(Some(-9), &c), -4);
/// assert_eq!(to_valid_last_index::<u8>(None, &[]), -1);
/// ```
pub fn to_valid_last_index<T>(index: Option<isize>, container: &[T]) -> isize {
    let len = signed_len(container);
    match index {
        None => len - 1,
        Some(i) if i >= 0 => i.min(len - 1),
        Some(i) => len + i,
    }
}

/// The exclusive end of a forward scan of `container` stopping at `index`.
///
/// `None` gives `len`. A non-negative index is clamped to `len`. A negative
/// index counts back from the end and is not clamped.
///
/// ```
/// use nested_array::to_valid_end_index;
/// let c = [0; 5];
/// assert_eq!(to_valid_end_index(None, &c), 5);
/// assert_eq!(to_valid_end_index(Some(2), &c), 2);
/// assert_eq!(to_valid_end_index(Some(9), &c), 5);
/// assert_eq!(to_valid_end_index(Some(-1), &c), 4);
/// assert_eq!(to_valid_end_index(Some(-9), &c), -4);
/// ```
pub fn to_valid_end_index<T>(index: Option<isize>, container: &[T]) -> isize {
    let len = signed_len(container);
    match index {
        None => len,
        Some(i) if i >= 0 => i.min(len),
        Some(i) => len + i,
    }
}

// ----------------------------------------------------------------------------

/// The direction of a scan along every axis.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Direction {
    /// Ascending indices, starting from [`to_valid_index()`].
    Forward,
    /// Descending indices, starting from [`to_valid_last_index()`].
    Backward,
}

/// The indices of one axis of a scan, in visiting order.
#[derive(Debug, Clone)]
pub(crate) enum Steps {
    Forward(std::ops::Range<usize>),
    Backward(std::iter::Rev<std::ops::Range<usize>>),
}

impl Steps {
    /// Visits `container` in `direction`, starting at `from`.
    pub(crate) fn new<T>(direction: Direction, from: Option<isize>, container: &[T]) -> Self {
        match direction {
            Direction::Forward => {
                Steps::Forward(to_valid_index(from, container)..container.len())
            },
            Direction::Backward => {
                let last = to_valid_last_index(from, container);
                let end = usize::try_from(last + 1).unwrap_or(0);
                Steps::Backward((0..end).rev())
            },
        }
    }

    /// Visits `start..end` of `container` forwards.
    pub(crate) fn between<T>(start: Option<isize>, end: Option<isize>, container: &[T]) -> Self {
        let first = to_valid_index(start, container);
        let end = usize::try_from(to_valid_end_index(end, container)).unwrap_or(0);
        Steps::Forward(first..end)
    }
}

impl Iterator for Steps {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Steps::Forward(range) => range.next(),
            Steps::Backward(range) => range.next(),
        }
    }
}

// ----------------------------------------------------------------------------

//! Splitting strings into nested arrays, one separator per axis, and
//! joining them back.

use std::fmt::{Display, Write as _};

use regex::{Regex};

use super::{ArrayLike, Nested, Result};
use super::error::{depth_limit, non_empty};

/// How to split a string along one axis.
#[derive(Debug, Clone)]
pub enum Separator {
    /// Split at every occurrence of a literal string. The empty string
    /// splits into characters.
    Str(String),
    /// Split at every match of a regular expression. Capture groups are
    /// spliced into the output between the pieces they separate.
    Regex(Regex),
}

impl Separator {
    /// Compiles `pattern` into a [`Separator::Regex`].
    ///
    /// ```
    /// use nested_array::{Separator, Error};
    /// assert!(Separator::pattern(r"\s+").is_ok());
    /// assert!(matches!(Separator::pattern("("), Err(Error::Pattern(_))));
    /// ```
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Separator::Regex(Regex::new(pattern)?))
    }

    /// Splits `content` into pieces.
    pub fn split(&self, content: &str) -> Vec<String> {
        match self {
            Separator::Str(s) if s.is_empty() => content.chars().map(String::from).collect(),
            Separator::Str(s) => content.split(s.as_str()).map(String::from).collect(),
            Separator::Regex(re) => split_regex(re, content),
        }
    }
}

impl From<&str> for Separator {
    fn from(s: &str) -> Self { Separator::Str(s.to_owned()) }
}

impl From<String> for Separator {
    fn from(s: String) -> Self { Separator::Str(s) }
}

impl From<char> for Separator {
    fn from(c: char) -> Self { Separator::Str(c.to_string()) }
}

impl From<Regex> for Separator {
    fn from(re: Regex) -> Self { Separator::Regex(re) }
}

/// Splits `content` at the matches of `re`.
///
/// An empty match never splits off an empty piece at the start of the
/// remaining text, and a match at the very end of `content` is ignored.
fn split_regex(re: &Regex, content: &str) -> Vec<String> {
    if content.is_empty() {
        return if re.is_match(content) { Vec::new() } else { vec![String::new()] };
    }
    let mut pieces = Vec::new();
    let mut piece_start = 0;
    let mut search_from = 0;
    while search_from < content.len() {
        let Some(captures) = re.captures_at(content, search_from) else { break };
        let Some(found) = captures.get(0) else { break };
        if found.start() >= content.len() { break; }
        if found.end() == piece_start {
            let step = content[found.start()..].chars().next().map_or(1, char::len_utf8);
            search_from = found.start() + step;
            continue;
        }
        pieces.push(content[piece_start..found.start()].to_owned());
        for group in captures.iter().skip(1) {
            pieces.push(group.map_or_else(String::new, |m| m.as_str().to_owned()));
        }
        piece_start = found.end();
        search_from = piece_start;
    }
    pieces.push(content[piece_start..].to_owned());
    pieces
}

fn split(separators: &[Separator], content: &str) -> Vec<Nested<String>> {
    let Some((first, rest)) = separators.split_first() else {
        return vec![Nested::Leaf(content.to_owned())];
    };
    let pieces = first.split(content).into_iter();
    if rest.is_empty() {
        pieces.map(Nested::Leaf).collect()
    } else {
        pieces.map(|piece| Nested::Array(split(rest, &piece))).collect()
    }
}

/// Splits `content` using `separators[0]`, then splits each piece using
/// `separators[1]`, and so on. The result has one axis per separator.
///
/// Returns [`Error::EmptySequence`] if `separators` is empty.
///
/// ```
/// use nested_array::{nested_split, shape, Nested, Separator};
/// let separators = [Separator::pattern(",|;").unwrap(), "".into()];
/// let a = nested_split(&separators, "AB,CD;EF").unwrap();
/// assert_eq!(shape(&a, None).unwrap(), [3, 2]);
/// assert_eq!(a[1], Nested::Array(vec![Nested::Leaf("C".to_string()), Nested::Leaf("D".to_string())]));
/// ```
///
/// [`Error::EmptySequence`]: super::Error::EmptySequence
pub fn nested_split(separators: &[Separator], content: &str) -> Result<Vec<Nested<String>>> {
    non_empty(separators, "separators")?;
    log::trace!("Splitting {} bytes along {} axes", content.len(), separators.len());
    Ok(split(separators, content))
}

// ----------------------------------------------------------------------------

/// How [`nested_join()`] writes a node it does not descend into.
pub trait JoinText {
    /// Appends the text of `self` to `out`.
    fn join_text(&self, out: &mut String);
}

/// A leaf is written using its [`Display`] implementation. An array is
/// written as its children joined by `","`.
impl<T: Display> JoinText for Nested<T> {
    fn join_text(&self, out: &mut String) {
        let _ = write!(out, "{}", self);
    }
}

fn join<N: ArrayLike + JoinText, S: AsRef<str>>(
    separators: &[S],
    parent: &[N],
    axis: usize,
    depth: usize,
    out: &mut String,
) {
    let separator = separators.get(axis).map_or(",", AsRef::as_ref);
    for (index, value) in parent.iter().enumerate() {
        if index > 0 { out.push_str(separator); }
        match value.as_array() {
            Some(children) if axis + 1 < depth => join(separators, children, axis + 1, depth, out),
            _ => value.join_text(out),
        }
    }
}

/// Concatenates the leaves of `content` into a string, using
/// `separators[i]` between the elements of axis `i`.
///
/// Axes without a separator use `","`. Nodes at `max_depth`, and leaves, are
/// written using their [`JoinText`] implementation. For strings split by
/// [`nested_split()`] with literal separators, joining with the same
/// separators gives back the original string.
///
/// ```
/// use nested_array::{nested, nested_join};
/// let a = nested![[0, 1, 2], [3, 4, 5]];
/// assert_eq!(nested_join(&[",", ""], &a, None).unwrap(), "012,345");
/// assert_eq!(nested_join(&[";"], &a, None).unwrap(), "0,1,2;3,4,5");
/// assert_eq!(nested_join(&["|", "+"], &a, Some(1)).unwrap(), "0,1,2|3,4,5");
/// ```
pub fn nested_join<N: ArrayLike + JoinText, S: AsRef<str>>(
    separators: &[S],
    content: &[N],
    max_depth: Option<usize>,
) -> Result<String> {
    let depth = depth_limit(max_depth)?;
    let mut out = String::new();
    join(separators, content, 0, depth, &mut out);
    Ok(out)
}

// ----------------------------------------------------------------------------

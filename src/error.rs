//! Usage errors.
//!
//! Operations check their arguments before touching the nested array, so
//! an `Err` from this module means nothing has been visited or written.

/// A caller passed arguments that no operation can make sense of.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The length of the {0} must not be zero")]
    EmptySequence(&'static str),

    #[error("max_depth must be at least 1, got {0}")]
    InvalidDepth(usize),

    #[error("Invalid separator pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Rejects an empty `sequence`, naming it `what` in the error.
pub(crate) fn non_empty<T>(sequence: &[T], what: &'static str) -> Result<()> {
    if sequence.is_empty() {
        log::debug!("Rejected empty {}", what);
        return Err(Error::EmptySequence(what));
    }
    Ok(())
}

/// Converts an optional `max_depth` into a number of axes.
///
/// `None` means unbounded.
pub(crate) fn depth_limit(max_depth: Option<usize>) -> Result<usize> {
    match max_depth {
        None => Ok(usize::MAX),
        Some(0) => {
            log::debug!("Rejected max_depth of zero");
            Err(Error::InvalidDepth(0))
        },
        Some(depth) => Ok(depth),
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth() {
        assert_eq!(depth_limit(None).unwrap(), usize::MAX);
        assert_eq!(depth_limit(Some(1)).unwrap(), 1);
        assert_eq!(depth_limit(Some(8)).unwrap(), 8);
        assert!(matches!(depth_limit(Some(0)), Err(Error::InvalidDepth(0))));
    }

    #[test]
    fn empty() {
        assert!(non_empty(&[3], "shape").is_ok());
        let err = non_empty::<usize>(&[], "shape").unwrap_err();
        assert_eq!(err.to_string(), "The length of the shape must not be zero");
    }
}

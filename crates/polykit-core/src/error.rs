//! Error handling for PolyKit
//!
//! Every core operation reports failure through these types instead of
//! mutating state partially:
//! - Design errors (malformed data, bad indices, empty history, missing selection)
//! - I/O errors raised while reading and writing scene files
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Scene and geometry error type
///
/// Represents the failures a scene command can report back to the UI.
/// None of them is fatal: the scene and history keep their pre-call state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// Persisted or imported data is malformed
    #[error("Malformed scene data: {reason}")]
    Format {
        /// What was wrong with the data.
        reason: String,
    },

    /// A shape or point index does not exist
    #[error("{target} index {index} out of range (len: {len})")]
    IndexOutOfRange {
        /// Which collection was addressed ("shape" or "point").
        target: &'static str,
        /// The requested index.
        index: usize,
        /// The length of the addressed collection.
        len: usize,
    },

    /// Undo was requested with no earlier state recorded
    #[error("No earlier state to undo")]
    NoHistory,

    /// A shape command was requested with no shape selected
    #[error("No shape selected")]
    NoSelection,

    /// A shape was built with a point count its kind does not allow
    #[error("A {kind} shape requires {expected} point(s), found {found}")]
    InvalidShape {
        /// The kind tag of the rejected shape.
        kind: &'static str,
        /// Human readable expected count.
        expected: &'static str,
        /// The number of points supplied.
        found: usize,
    },
}

impl DesignError {
    /// Create a format error from a message
    pub fn format(reason: impl Into<String>) -> Self {
        DesignError::Format {
            reason: reason.into(),
        }
    }

    /// Index error for the shape list
    pub fn shape_index(index: usize, len: usize) -> Self {
        DesignError::IndexOutOfRange {
            target: "shape",
            index,
            len,
        }
    }

    /// Index error for the point list of a shape
    pub fn point_index(index: usize, len: usize) -> Self {
        DesignError::IndexOutOfRange {
            target: "point",
            index,
            len,
        }
    }
}

impl From<serde_json::Error> for DesignError {
    fn from(err: serde_json::Error) -> Self {
        DesignError::format(err.to_string())
    }
}

/// Main error type for PolyKit
///
/// Returned by the operations that touch the filesystem, where a failure is
/// either a design error in the data or an I/O error reading or writing it.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene or geometry error
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the design error, if this is one
    pub fn as_design(&self) -> Option<&DesignError> {
        match self {
            Error::Design(err) => Some(err),
            Error::Io(_) => None,
        }
    }

    /// Check if the data itself was malformed
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Design(DesignError::Format { .. }))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

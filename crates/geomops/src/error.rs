//! Error types.
//!
//! Only malformed input is an error here. Degenerate geometry (zero vectors,
//! identity rotations, parallel inputs) gets a documented fallback value and
//! permissive dimension mismatches return `None`.

use std::fmt;

/// Malformed geometric input detected before any computation runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    InvalidShape { reason: String },
    /// A named argument (axis, plane, convention) that is not recognized.
    InvalidArgument { reason: String },
}

impl GeometryError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }

    pub(crate) fn argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { reason } => write!(f, "invalid shape: {reason}"),
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Failures of [`crate::units::parse_dimensioned_value`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnitError {
    /// No numeric literal at the start of the text.
    InvalidNumber { text: String },
    /// Suffix (or requested target unit) is not in the unit table.
    UnknownUnit { unit: String },
    /// Source and target units measure different quantities.
    IncompatibleUnits { from: String, to: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { text } => write!(f, "no numeric value in {text:?}"),
            Self::UnknownUnit { unit } => write!(f, "unknown unit {unit:?}"),
            Self::IncompatibleUnits { from, to } => {
                write!(f, "cannot express {from:?} in {to:?}: different quantities")
            }
        }
    }
}

impl std::error::Error for UnitError {}

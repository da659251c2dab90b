//! Error types for shapetrace

use crate::math::Vec3;
use thiserror::Error;

/// Configuration errors raised while building a trace.
///
/// Running a trace never fails; every error here surfaces at the call that
/// received the bad argument.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TracerError {
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Radius can't be negative (got {0})")]
    NegativeRadius(f32),

    #[error("Box half extents can't be negative (got {0})")]
    NegativeExtents(Vec3),

    #[error("Max casts should be higher than 1 or -1 (got {0})")]
    InvalidCastLimit(i32),

    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),
}

pub type Result<T> = std::result::Result<T, TracerError>;

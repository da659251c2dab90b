//! Math types for shapetrace

pub use glam::{Quat, Vec3};

use crate::error::{Result, TracerError};

/// A position plus orientation in scene space.
///
/// Used as the starting frame of a box cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Where a probe travels to, given its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// Travel from the origin to this point.
    Endpoint(Vec3),
    /// Travel along `direction` scaled by `length`.
    ///
    /// The direction is scaled as given and not normalized first.
    Along { direction: Vec3, length: f32 },
}

impl Target {
    /// Resolves the travel vector for a probe starting at `origin`.
    ///
    /// Its magnitude is the maximum travel distance.
    pub fn direction_from(&self, origin: Vec3) -> Result<Vec3> {
        let direction = match *self {
            Target::Endpoint(endpoint) => {
                ensure_finite(endpoint, "endpoint")?;
                endpoint - origin
            }
            Target::Along { direction, length } => {
                ensure_finite(direction, "direction")?;
                if !length.is_finite() {
                    return Err(TracerError::NonFinite("length"));
                }
                direction * length
            }
        };
        ensure_finite(direction, "direction")?;
        Ok(direction)
    }
}

pub(crate) fn ensure_finite(v: Vec3, what: &'static str) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(TracerError::NonFinite(what))
    }
}

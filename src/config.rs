//! Configuration for shapetrace

use crate::error::{Result, TracerError};
use crate::math::Vec3;
use crate::scene::ProbeParams;

/// Upper bound on the number of casts a single `run` may issue.
///
/// Built from the integer convention `-1` (unbounded) or `n > 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastLimit(Option<u32>);

impl CastLimit {
    pub const UNBOUNDED: Self = Self(None);

    /// Limits a run to at most `max` casts. `max` must be higher than 1.
    pub fn at_most(max: u32) -> Result<Self> {
        if max > 1 {
            Ok(Self(Some(max)))
        } else {
            Err(TracerError::InvalidCastLimit(max.min(i32::MAX as u32) as i32))
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the bound, or `None` when unbounded
    pub fn max(&self) -> Option<u32> {
        self.0
    }

    /// True once `casts` has reached the bound
    pub fn reached(&self, casts: u32) -> bool {
        self.0.is_some_and(|max| casts >= max)
    }
}

impl TryFrom<i32> for CastLimit {
    type Error = TracerError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            -1 => Ok(Self::UNBOUNDED),
            n if n > 1 => Ok(Self(Some(n as u32))),
            n => Err(TracerError::InvalidCastLimit(n)),
        }
    }
}

/// The state a trace casts from.
///
/// Owned by a single trace and changed only through its configuration
/// methods, or by `run` when it advances past a rejected hit.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceConfig {
    /// Where the next cast starts
    pub origin: Vec3,
    /// Heading of the cast; its magnitude is the maximum travel distance
    pub direction: Vec3,
    pub cast_limit: CastLimit,
    /// Passed to the backend with every cast, exclusions included
    pub params: ProbeParams,
}

impl TraceConfig {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            cast_limit: CastLimit::UNBOUNDED,
            params: ProbeParams::default(),
        }
    }
}

/// Defaults applied to every trace a `Tracer` builds.
#[derive(Debug, Clone, Default)]
pub struct TracerDesc {
    pub cast_limit: CastLimit,
    pub params: ProbeParams,
}

impl TracerDesc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default cast limit using the `-1 | n > 1` convention
    pub fn max_casts(mut self, max_casts: i32) -> Result<Self> {
        self.cast_limit = CastLimit::try_from(max_casts)?;
        Ok(self)
    }

    pub fn params(mut self, params: ProbeParams) -> Self {
        self.params = params;
        self
    }

    pub fn collision_group(mut self, group: impl Into<String>) -> Self {
        self.params.collision_group = Some(group.into());
        self
    }
}

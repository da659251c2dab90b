//! Probe shapes. Each one turns a trace's configuration into a single backend call.

use crate::config::TraceConfig;
use crate::error::{Result, TracerError};
use crate::math::{Pose, Quat, Vec3, ensure_finite};
use crate::scene::{ProbeBackend, ProbeHit};

/// A probe shape that can be cast against a [`ProbeBackend`].
pub trait Shape {
    /// Issues exactly one backend query from `config.origin` along `config.direction`.
    fn cast<B: ProbeBackend + ?Sized>(&self, backend: &B, config: &TraceConfig) -> Option<ProbeHit>;
}

/// Infinitely thin ray.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ray;

impl Shape for Ray {
    fn cast<B: ProbeBackend + ?Sized>(&self, backend: &B, config: &TraceConfig) -> Option<ProbeHit> {
        backend.raycast(config.origin, config.direction, &config.params)
    }
}

/// Sphere swept along the trace direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f32,
}

impl Sphere {
    /// Creates a sphere. A radius of zero is allowed.
    pub fn new(radius: f32) -> Result<Self> {
        if radius.is_nan() || radius.is_infinite() {
            return Err(TracerError::NonFinite("radius"));
        }
        if radius < 0.0 {
            return Err(TracerError::NegativeRadius(radius));
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn cast<B: ProbeBackend + ?Sized>(&self, backend: &B, config: &TraceConfig) -> Option<ProbeHit> {
        backend.spherecast(config.origin, self.radius, config.direction, &config.params)
    }
}

/// Oriented box swept along the trace direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    half_extents: Vec3,
    rotation: Quat,
}

impl Block {
    /// Creates an axis-aligned box. Use [`Block::with_rotation`] or
    /// `Trace::set_rotation` to orient it.
    pub fn new(half_extents: Vec3) -> Result<Self> {
        ensure_finite(half_extents, "half extents")?;
        if half_extents.min_element() < 0.0 {
            return Err(TracerError::NegativeExtents(half_extents));
        }
        Ok(Self {
            half_extents,
            rotation: Quat::IDENTITY,
        })
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub(crate) fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    /// Starting frame of the cast: the scene-space origin composed with the
    /// box's rotation.
    pub fn frame(&self, origin: Vec3) -> Pose {
        Pose::new(origin, self.rotation)
    }
}

impl Shape for Block {
    fn cast<B: ProbeBackend + ?Sized>(&self, backend: &B, config: &TraceConfig) -> Option<ProbeHit> {
        backend.blockcast(
            self.frame(config.origin),
            self.half_extents,
            config.direction,
            &config.params,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_radius_validation() {
        assert_eq!(Sphere::new(-1.0), Err(TracerError::NegativeRadius(-1.0)));
        assert_eq!(Sphere::new(f32::NAN), Err(TracerError::NonFinite("radius")));
        assert_eq!(Sphere::new(0.0).unwrap().radius(), 0.0);
        assert_eq!(Sphere::new(2.5).unwrap().radius(), 2.5);
    }

    #[test]
    fn test_block_validation() {
        let extents = Vec3::new(1.0, -0.5, 1.0);
        assert_eq!(Block::new(extents), Err(TracerError::NegativeExtents(extents)));
        assert!(Block::new(Vec3::new(f32::NAN, 1.0, 1.0)).is_err());
        assert!(Block::new(Vec3::ZERO).is_ok());
    }

    #[test]
    fn test_block_frame_defaults_to_identity() {
        let block = Block::new(Vec3::ONE).unwrap();
        let origin = Vec3::new(3.0, 4.0, 5.0);
        assert_eq!(block.frame(origin), Pose::from_position(origin));

        let rotation = Quat::from_rotation_y(0.7);
        let frame = block.with_rotation(rotation).frame(origin);
        assert_eq!(frame.position, origin);
        assert_eq!(frame.rotation, rotation);
    }
}

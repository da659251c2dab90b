use crate::config::{TraceConfig, TracerDesc};
use crate::error::{Result, TracerError};
use crate::math::{Target, Vec3, ensure_finite};
use crate::scene::ProbeBackend;
use crate::trace::{Block, Ray, Shape, Sphere, Trace};

/// Arguments that place a probe: where it starts and where it goes.
///
/// Both fields are required; they are optional here so that hosts forwarding
/// loosely-typed input get a configuration error instead of a panic.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProbeDesc {
    pub origin: Option<Vec3>,
    pub target: Option<Target>,
}

impl ProbeDesc {
    pub fn to_endpoint(origin: Vec3, endpoint: Vec3) -> Self {
        Self {
            origin: Some(origin),
            target: Some(Target::Endpoint(endpoint)),
        }
    }

    pub fn along(origin: Vec3, direction: Vec3, length: f32) -> Self {
        Self {
            origin: Some(origin),
            target: Some(Target::Along { direction, length }),
        }
    }

    /// Resolves to `(origin, direction)`.
    pub fn resolve(&self) -> Result<(Vec3, Vec3)> {
        let origin = self.origin.ok_or(TracerError::MissingArgument("origin"))?;
        let target = self
            .target
            .ok_or(TracerError::MissingArgument("endpoint or direction"))?;
        ensure_finite(origin, "origin")?;
        let direction = target.direction_from(origin)?;
        Ok((origin, direction))
    }
}

/// Builds traces against a scene.
///
/// `Tracer` is the entry point of shapetrace. It borrows the host scene and
/// hands out [`Trace`]s for each probe shape, validating their arguments up
/// front so that running a trace cannot fail.
///
/// # Example
///
/// ```ignore
/// let tracer = Tracer::new(&scene);
///
/// // From a start point to an end point
/// let hit = tracer.ray(muzzle, target)?.run();
///
/// // Along a direction, with a length
/// let swept = tracer.sphere_along(0.5, muzzle, aim, 100.0)?.run();
/// ```
pub struct Tracer<'s, S: ?Sized> {
    scene: &'s S,
    desc: TracerDesc,
}

impl<'s, S> Tracer<'s, S>
where
    S: ProbeBackend + ?Sized,
{
    pub fn new(scene: &'s S) -> Self {
        Self::with_desc(scene, TracerDesc::default())
    }

    pub fn with_desc(scene: &'s S, desc: TracerDesc) -> Self {
        Self { scene, desc }
    }

    pub fn desc(&self) -> &TracerDesc {
        &self.desc
    }

    pub fn scene(&self) -> &'s S {
        self.scene
    }

    /// Builds a trace for any shape from a [`ProbeDesc`].
    pub fn trace<K: Shape>(&self, shape: K, probe: &ProbeDesc) -> Result<Trace<'s, S, K>> {
        let (origin, direction) = probe.resolve()?;
        let config = TraceConfig {
            origin,
            direction,
            cast_limit: self.desc.cast_limit,
            params: self.desc.params.clone(),
        };
        Ok(Trace::new(self.scene, shape, config))
    }

    /// Ray from `origin` to `endpoint`.
    pub fn ray(&self, origin: Vec3, endpoint: Vec3) -> Result<Trace<'s, S, Ray>> {
        self.trace(Ray, &ProbeDesc::to_endpoint(origin, endpoint))
    }

    /// Ray from `origin` along `direction * length`.
    pub fn ray_along(
        &self,
        origin: Vec3,
        direction: Vec3,
        length: f32,
    ) -> Result<Trace<'s, S, Ray>> {
        self.trace(Ray, &ProbeDesc::along(origin, direction, length))
    }

    /// Sphere of `radius` swept from `origin` to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`TracerError::NegativeRadius`] if `radius` is negative.
    pub fn sphere(&self, radius: f32, origin: Vec3, endpoint: Vec3) -> Result<Trace<'s, S, Sphere>> {
        self.trace(Sphere::new(radius)?, &ProbeDesc::to_endpoint(origin, endpoint))
    }

    /// Sphere of `radius` swept from `origin` along `direction * length`.
    pub fn sphere_along(
        &self,
        radius: f32,
        origin: Vec3,
        direction: Vec3,
        length: f32,
    ) -> Result<Trace<'s, S, Sphere>> {
        self.trace(
            Sphere::new(radius)?,
            &ProbeDesc::along(origin, direction, length),
        )
    }

    /// Box with `half_extents` swept from `origin` to `endpoint`.
    pub fn block(
        &self,
        half_extents: Vec3,
        origin: Vec3,
        endpoint: Vec3,
    ) -> Result<Trace<'s, S, Block>> {
        self.trace(
            Block::new(half_extents)?,
            &ProbeDesc::to_endpoint(origin, endpoint),
        )
    }

    /// Box with `half_extents` swept from `origin` along `direction * length`.
    pub fn block_along(
        &self,
        half_extents: Vec3,
        origin: Vec3,
        direction: Vec3,
        length: f32,
    ) -> Result<Trace<'s, S, Block>> {
        self.trace(
            Block::new(half_extents)?,
            &ProbeDesc::along(origin, direction, length),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_desc_missing_arguments() {
        let no_origin = ProbeDesc {
            origin: None,
            target: Some(Target::Endpoint(Vec3::X)),
        };
        assert_eq!(
            no_origin.resolve(),
            Err(TracerError::MissingArgument("origin"))
        );

        let no_target = ProbeDesc {
            origin: Some(Vec3::ZERO),
            target: None,
        };
        assert_eq!(
            no_target.resolve(),
            Err(TracerError::MissingArgument("endpoint or direction"))
        );
    }

    #[test]
    fn test_probe_desc_forms_agree() {
        let origin = Vec3::new(0.0, 1.0, 0.0);
        let end = Vec3::new(0.0, 1.0, 8.0);
        let (_, by_end) = ProbeDesc::to_endpoint(origin, end).resolve().unwrap();
        let (_, by_dir) = ProbeDesc::along(origin, Vec3::Z, 8.0).resolve().unwrap();
        assert_eq!(by_end, by_dir);
    }

    #[test]
    fn test_probe_desc_non_finite_origin() {
        let desc = ProbeDesc::to_endpoint(Vec3::splat(f32::NAN), Vec3::ZERO);
        assert_eq!(desc.resolve(), Err(TracerError::NonFinite("origin")));
    }
}

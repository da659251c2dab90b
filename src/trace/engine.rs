use crate::config::{CastLimit, TraceConfig};
use crate::error::Result;
use crate::math::{Quat, Vec3};
use crate::scene::{Hierarchy, ObjectId, ProbeBackend, ProbeParams, TagRegistry};
use crate::trace::filter::{FilterChain, accept_only_tagged, reject_tagged};
use crate::trace::shape::{Block, Shape};
use crate::trace::TraceResult;

/// A configured probe plus its retry policy.
///
/// Configuration methods mutate the trace in place and return `&mut Self` so
/// calls can be chained. [`Trace::run`] casts until a hit passes every filter,
/// the probe misses, or the cast limit is reached.
///
/// # Example
///
/// ```ignore
/// let tracer = Tracer::new(&scene);
/// let result = tracer
///     .ray(Vec3::ZERO, Vec3::new(0.0, 0.0, -100.0))?
///     .ignore(player)
///     .add_filter(|r| r.material() == Material::Glass)
///     .run();
/// ```
pub struct Trace<'s, S: ?Sized, K> {
    scene: &'s S,
    shape: K,
    config: TraceConfig,
    filters: FilterChain<'s>,
    rejected: Vec<ObjectId>,
    casts_done: u32,
}

impl<'s, S, K> Trace<'s, S, K>
where
    S: ProbeBackend + ?Sized,
    K: Shape,
{
    pub fn new(scene: &'s S, shape: K, config: TraceConfig) -> Self {
        Self {
            scene,
            shape,
            config,
            filters: FilterChain::new(),
            rejected: Vec::new(),
            casts_done: 0,
        }
    }

    pub fn shape(&self) -> &K {
        &self.shape
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn origin(&self) -> Vec3 {
        self.config.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.config.direction
    }

    /// Objects rejected by filters during the most recent run, in order
    pub fn rejected(&self) -> &[ObjectId] {
        &self.rejected
    }

    /// Casts issued by this trace since it was built or last reset.
    ///
    /// The count carries over between runs, so once it reaches the cast
    /// limit every later run returns its first result unfiltered.
    pub fn casts_done(&self) -> u32 {
        self.casts_done
    }

    /// Zeroes the cast count so the next run gets the full cast limit again.
    pub fn reset_casts(&mut self) -> &mut Self {
        self.casts_done = 0;
        self
    }

    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Moves the origin. `run` also does this when it passes a rejected hit.
    pub fn set_origin(&mut self, origin: Vec3) -> &mut Self {
        self.config.origin = origin;
        self
    }

    pub fn set_direction(&mut self, direction: Vec3) -> &mut Self {
        self.config.direction = direction;
        self
    }

    /// Sets the maximum number of casts, counted across runs until [`Trace::reset_casts`].
    ///
    /// Use `-1` to cast until a filter accepts or the probe misses. Any other
    /// value must be higher than 1.
    pub fn set_max_casts(&mut self, max_casts: i32) -> Result<&mut Self> {
        self.config.cast_limit = CastLimit::try_from(max_casts)?;
        Ok(self)
    }

    pub fn set_cast_limit(&mut self, limit: CastLimit) -> &mut Self {
        self.config.cast_limit = limit;
        self
    }

    /// Replaces the query parameters, exclusions included.
    pub fn use_params(&mut self, params: ProbeParams) -> &mut Self {
        self.config.params = params;
        self
    }

    pub fn ignore(&mut self, object: ObjectId) -> &mut Self {
        self.config.params.excluded.add(object);
        self
    }

    pub fn ignore_all<I>(&mut self, objects: I) -> &mut Self
    where
        I: IntoIterator<Item = ObjectId>,
    {
        self.config.params.excluded.extend(objects);
        self
    }

    /// Ignores `object` if there is one; does nothing for `None`.
    pub fn ignore_opt(&mut self, object: Option<ObjectId>) -> &mut Self {
        if let Some(object) = object {
            self.ignore(object);
        }
        self
    }

    /// Appends a filter. Returning `true` from it rejects the hit and casts
    /// again from the hit point with the hit object ignored.
    pub fn add_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: Fn(&TraceResult) -> bool + 's,
    {
        self.filters.push(filter);
        self
    }

    /// Runs the trace.
    ///
    /// Each rejected hit moves the origin to the hit position and adds the
    /// hit object to the exclusion set. Both stay on the trace afterwards, so
    /// a later run continues from there unless the caller resets them.
    pub fn run(&mut self) -> TraceResult {
        self.rejected.clear();

        loop {
            let result = match self.shape.cast(self.scene, &self.config) {
                Some(hit) => TraceResult::from_probe(hit),
                None => TraceResult::miss(self.config.origin, self.config.direction),
            };
            self.casts_done = self.casts_done.saturating_add(1);
            log::trace!(
                "cast {} from {} hit {:?} at distance {}",
                self.casts_done,
                self.config.origin,
                result.hit(),
                result.distance
            );

            if self.config.cast_limit.reached(self.casts_done) {
                log::debug!("cast limit reached after {} casts", self.casts_done);
                return result;
            }

            let Some(object) = result.hit() else {
                return result;
            };

            if !self.filters.rejects(&result) {
                return result;
            }

            log::debug!("filter rejected {}, casting again from {}", object, result.position);
            self.config.origin = result.position;
            self.config.params.excluded.add(object);
            self.rejected.push(object);
        }
    }
}

impl<'s, S> Trace<'s, S, Block>
where
    S: ProbeBackend + ?Sized,
{
    /// Orients the box. Identity unless set.
    pub fn set_rotation(&mut self, rotation: Quat) -> &mut Self {
        self.shape.set_rotation(rotation);
        self
    }
}

impl<'s, S, K> Trace<'s, S, K>
where
    S: ProbeBackend + TagRegistry + Hierarchy + ?Sized,
    K: Shape,
{
    /// Only accepts hits on objects carrying `tag`.
    ///
    /// With `include_descendants`, objects under something tagged `tag` right
    /// now are accepted too.
    pub fn with_tag(&mut self, tag: &str, include_descendants: bool) -> &mut Self {
        self.filters
            .push_boxed(accept_only_tagged(self.scene, tag, include_descendants));
        self
    }

    /// Passes through objects carrying `tag`.
    ///
    /// With `include_descendants`, objects under something tagged `tag` right
    /// now are passed through too.
    pub fn without_tag(&mut self, tag: &str, include_descendants: bool) -> &mut Self {
        self.filters
            .push_boxed(reject_tagged(self.scene, tag, include_descendants));
        self
    }
}

impl<S: ?Sized, K: std::fmt::Debug> std::fmt::Debug for Trace<'_, S, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trace")
            .field("shape", &self.shape)
            .field("config", &self.config)
            .field("filters", &self.filters)
            .field("rejected", &self.rejected)
            .field("casts_done", &self.casts_done)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Pose;
    use crate::scene::{Material, ProbeHit};
    use crate::trace::shape::Ray;

    // Every cast hits object 1 one unit ahead
    struct Wall;

    impl ProbeBackend for Wall {
        fn raycast(&self, origin: Vec3, _direction: Vec3, _params: &ProbeParams) -> Option<ProbeHit> {
            Some(ProbeHit::new(
                origin + Vec3::X,
                ObjectId(1),
                Vec3::NEG_X,
                Material::Concrete,
                1.0,
            ))
        }

        fn spherecast(
            &self,
            origin: Vec3,
            _radius: f32,
            direction: Vec3,
            params: &ProbeParams,
        ) -> Option<ProbeHit> {
            self.raycast(origin, direction, params)
        }

        fn blockcast(
            &self,
            frame: Pose,
            _half_extents: Vec3,
            direction: Vec3,
            params: &ProbeParams,
        ) -> Option<ProbeHit> {
            self.raycast(frame.position, direction, params)
        }
    }

    #[test]
    fn test_cast_counter_saturates() {
        let wall = Wall;
        let mut trace = Trace::new(&wall, Ray, TraceConfig::new(Vec3::ZERO, Vec3::X * 10.0));
        trace.set_max_casts(3).unwrap().add_filter(|_| true);
        trace.casts_done = u32::MAX;

        let result = trace.run();
        assert_eq!(trace.casts_done(), u32::MAX);
        assert_eq!(result.hit(), Some(ObjectId(1)));
        assert!(trace.rejected().is_empty());

        trace.reset_casts();
        assert_eq!(trace.casts_done(), 0);
    }
}

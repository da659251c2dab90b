//! Probe backend trait for scene intersection queries.
//!
//! This module provides the interface hosts implement to answer ray, sphere and
//! box casts. Traces call it once per cast and never write to the scene.

use crate::math::{Pose, Vec3};
use crate::scene::{Material, ObjectId};
use std::collections::HashSet;

/// Closest hit found by a single probe.
///
/// Returned by the [`ProbeBackend`] cast methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    /// Point where the probe hit, in scene space
    pub position: Vec3,

    /// Object that was hit
    pub object: ObjectId,

    /// Surface normal at the hit point, pointing away from the surface
    pub normal: Vec3,

    /// Material of the hit surface
    pub material: Material,

    /// Distance travelled from the probe origin to the hit
    pub distance: f32,
}

impl ProbeHit {
    pub fn new(
        position: Vec3,
        object: ObjectId,
        normal: Vec3,
        material: Material,
        distance: f32,
    ) -> Self {
        Self {
            position,
            object,
            normal,
            material,
            distance,
        }
    }
}

/// Objects a probe must ignore.
///
/// Keeps insertion order and never holds the same object twice. Membership
/// checks are constant time, so backends can call `contains` per candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    objects: Vec<ObjectId>,
    index: HashSet<ObjectId>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object. Returns false if it was already excluded.
    pub fn add(&mut self, object: ObjectId) -> bool {
        if !self.index.insert(object) {
            return false;
        }
        self.objects.push(object);
        true
    }

    pub fn contains(&self, object: ObjectId) -> bool {
        self.index.contains(&object)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.iter().copied()
    }
}

impl FromIterator<ObjectId> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = ObjectId>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<ObjectId> for ExclusionSet {
    fn extend<I: IntoIterator<Item = ObjectId>>(&mut self, iter: I) {
        for object in iter {
            self.add(object);
        }
    }
}

/// Query parameters handed to the backend with every cast.
///
/// Only `excluded` is touched by traces; the remaining fields are passed
/// through for the backend to interpret.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeParams {
    pub excluded: ExclusionSet,

    /// Collision group the probe belongs to (None = default group)
    pub collision_group: Option<String>,

    /// Whether water volumes should be passed through
    pub ignore_water: bool,
}

impl ProbeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn excluding<I: IntoIterator<Item = ObjectId>>(objects: I) -> Self {
        Self {
            excluded: objects.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// Trait for answering probe queries against a scene.
///
/// Implement this trait to plug an existing collision system (a physics engine,
/// a BVH, a game engine's query API) into shapetrace.
///
/// # Contract
///
/// - `direction` carries both the heading and the maximum travel distance as
///   its magnitude. A zero-length direction is valid and must not panic.
/// - Return the **closest** hit that is not in `params.excluded`, or `None`.
/// - Calls must not modify the scene; traces issue them back to back.
///
/// # Example
///
/// ```
/// use shapetrace::math::{Pose, Vec3};
/// use shapetrace::scene::{Material, ObjectId, ProbeBackend, ProbeHit, ProbeParams};
///
/// /// An infinite floor at y = 0.
/// struct Floor;
///
/// impl ProbeBackend for Floor {
///     fn raycast(&self, origin: Vec3, direction: Vec3, params: &ProbeParams) -> Option<ProbeHit> {
///         let floor = ObjectId(1);
///         if params.excluded.contains(floor) || direction.y >= 0.0 || origin.y < 0.0 {
///             return None;
///         }
///         let t = origin.y / -direction.y;
///         (t <= 1.0).then(|| {
///             let position = origin + direction * t;
///             ProbeHit::new(position, floor, Vec3::Y, Material::Concrete, direction.length() * t)
///         })
///     }
///
///     fn spherecast(&self, origin: Vec3, radius: f32, direction: Vec3, params: &ProbeParams) -> Option<ProbeHit> {
///         self.raycast(origin - Vec3::Y * radius, direction, params)
///     }
///
///     fn blockcast(&self, frame: Pose, half_extents: Vec3, direction: Vec3, params: &ProbeParams) -> Option<ProbeHit> {
///         self.raycast(frame.position - Vec3::Y * half_extents.y, direction, params)
///     }
/// }
///
/// let hit = Floor.raycast(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -4.0, 0.0), &ProbeParams::new());
/// assert_eq!(hit.map(|h| h.distance), Some(2.0));
/// ```
pub trait ProbeBackend {
    /// Casts an infinitely thin ray from `origin` along `direction`.
    fn raycast(&self, origin: Vec3, direction: Vec3, params: &ProbeParams) -> Option<ProbeHit>;

    /// Sweeps a sphere of `radius` centred at `origin` along `direction`.
    fn spherecast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        params: &ProbeParams,
    ) -> Option<ProbeHit>;

    /// Sweeps a box with `half_extents`, placed and oriented by `frame`, along `direction`.
    fn blockcast(
        &self,
        frame: Pose,
        half_extents: Vec3,
        direction: Vec3,
        params: &ProbeParams,
    ) -> Option<ProbeHit>;
}

impl<B: ProbeBackend + ?Sized> ProbeBackend for &B {
    fn raycast(&self, origin: Vec3, direction: Vec3, params: &ProbeParams) -> Option<ProbeHit> {
        (**self).raycast(origin, direction, params)
    }

    fn spherecast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        params: &ProbeParams,
    ) -> Option<ProbeHit> {
        (**self).spherecast(origin, radius, direction, params)
    }

    fn blockcast(
        &self,
        frame: Pose,
        half_extents: Vec3,
        direction: Vec3,
        params: &ProbeParams,
    ) -> Option<ProbeHit> {
        (**self).blockcast(frame, half_extents, direction, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_set_is_duplicate_free() {
        let mut set = ExclusionSet::new();
        assert!(set.is_empty());
        assert!(set.add(ObjectId(3)));
        assert!(set.add(ObjectId(1)));
        assert!(!set.add(ObjectId(3)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![ObjectId(3), ObjectId(1)]);
    }

    #[test]
    fn test_exclusion_set_with_many_objects() {
        let mut set: ExclusionSet = (0..5000).map(ObjectId).collect();
        assert_eq!(set.len(), 5000);
        assert!(set.contains(ObjectId(4999)));
        assert!(!set.contains(ObjectId(5000)));
        assert!(!set.add(ObjectId(0)));
        assert_eq!(set.iter().next(), Some(ObjectId(0)));
        assert_eq!(set.iter().last(), Some(ObjectId(4999)));
    }

    #[test]
    fn test_params_excluding() {
        let params = ProbeParams::excluding([ObjectId(1), ObjectId(2), ObjectId(1)]);
        assert_eq!(params.excluded.len(), 2);
        assert!(params.excluded.contains(ObjectId(2)));
        assert!(params.collision_group.is_none());
        assert!(!params.ignore_water);
    }

    // Simple test backend that always returns a miss
    struct NoopBackend;

    impl ProbeBackend for NoopBackend {
        fn raycast(&self, _origin: Vec3, _direction: Vec3, _params: &ProbeParams) -> Option<ProbeHit> {
            None
        }

        fn spherecast(
            &self,
            _origin: Vec3,
            _radius: f32,
            _direction: Vec3,
            _params: &ProbeParams,
        ) -> Option<ProbeHit> {
            None
        }

        fn blockcast(
            &self,
            _frame: Pose,
            _half_extents: Vec3,
            _direction: Vec3,
            _params: &ProbeParams,
        ) -> Option<ProbeHit> {
            None
        }
    }

    #[test]
    fn test_noop_backend_through_reference() {
        let backend = NoopBackend;
        let by_ref: &dyn ProbeBackend = &backend;
        let result = (&by_ref).raycast(Vec3::ZERO, Vec3::Z, &ProbeParams::new());
        assert!(result.is_none());
    }
}

//! Host scene capabilities consumed by traces.
//!
//! shapetrace does no intersection math of its own. The host scene provides it
//! by implementing [`ProbeBackend`], and optionally [`TagRegistry`] and
//! [`Hierarchy`] to enable tag filters.
//!
//! # Overview
//!
//! 1. **ProbeBackend** - ray, sphere and box cast queries against the scene
//! 2. **TagRegistry** - which objects carry a tag
//! 3. **Hierarchy** - parent/child relation between objects
//! 4. **ObjectId** / **Material** - what a hit reports back
//!
//! # Example
//!
//! ```
//! use shapetrace::math::{Pose, Vec3};
//! use shapetrace::scene::{ProbeBackend, ProbeHit, ProbeParams};
//!
//! struct EmptyScene;
//!
//! impl ProbeBackend for EmptyScene {
//!     fn raycast(&self, _origin: Vec3, _direction: Vec3, _params: &ProbeParams) -> Option<ProbeHit> {
//!         None
//!     }
//!
//!     fn spherecast(
//!         &self,
//!         _origin: Vec3,
//!         _radius: f32,
//!         _direction: Vec3,
//!         _params: &ProbeParams,
//!     ) -> Option<ProbeHit> {
//!         None
//!     }
//!
//!     fn blockcast(
//!         &self,
//!         _frame: Pose,
//!         _half_extents: Vec3,
//!         _direction: Vec3,
//!         _params: &ProbeParams,
//!     ) -> Option<ProbeHit> {
//!         None
//!     }
//! }
//! ```

pub mod backend;
pub mod material;
pub mod object;
pub mod registry;

pub use backend::{ExclusionSet, ProbeBackend, ProbeHit, ProbeParams};
pub use material::Material;
pub use object::ObjectId;
pub use registry::{Hierarchy, TagRegistry};

//! # shapetrace
//!
//! Ray, sphere and box traces against a host scene, with filter-driven retry.
//!
//! A trace casts its probe shape once, then hands the result to its filters. If
//! a filter rejects the hit, the trace moves its origin to the hit point, ignores
//! the hit object, and casts again. This lets callers see past glass, allies or
//! anything else a predicate can describe, without writing the loop themselves.
//!
//! shapetrace does no intersection math. The host scene answers queries by
//! implementing [`ProbeBackend`], and [`TagRegistry`] + [`Hierarchy`] for tag
//! filters.
//!
//! ## Quick Start
//!
//! ```ignore
//! use shapetrace::*;
//!
//! let tracer = Tracer::new(&scene);
//!
//! let result = tracer
//!     .ray(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 2.0, -50.0))?
//!     .ignore(player)
//!     .without_tag("ally", true)
//!     .add_filter(|r| r.material() == Material::Glass)
//!     .set_max_casts(8)?
//!     .run();
//!
//! match result.hit() {
//!     Some(object) => println!("hit {} at {}", object, result.position),
//!     None => println!("clear for {} units", result.distance),
//! }
//! # Ok::<(), TracerError>(())
//! ```
//!
//! ## Key Components
//!
//! - **[`Tracer`]**: Builds traces for each shape from either an endpoint or a direction and length
//! - **[`Trace`]**: A configured probe plus its filters, exclusions and cast limit
//! - **[`TraceResult`]**: Uniform result, including a synthesized one on a miss
//! - **[`ProbeBackend`]**: Trait the host implements to answer ray, sphere and box casts
//!
//! ## Logging
//!
//! Traces log through the `log` facade: every cast at `trace` level, rejections
//! and cast-limit hits at `debug` level.

pub mod config;
pub mod error;
pub mod math;
pub mod scene;
pub mod trace;
pub mod tracer;

pub use config::{CastLimit, TraceConfig, TracerDesc};
pub use error::{Result, TracerError};
pub use math::{Pose, Quat, Target, Vec3};
pub use scene::{
    ExclusionSet, Hierarchy, Material, ObjectId, ProbeBackend, ProbeHit, ProbeParams, TagRegistry,
};
pub use trace::{Block, Filter, Ray, Shape, Sphere, Surface, Trace, TraceResult};
pub use tracer::{ProbeDesc, Tracer};

//! Traces: a probe shape, a filter chain and the retry loop that ties them together.
//!
//! # Retry loop
//!
//! One [`Trace::run`] goes through these steps:
//!
//! 1. Cast the shape once. A miss is turned into a synthesized result at
//!    `origin + direction`.
//! 2. Stop if the cast limit is reached or nothing was hit.
//! 3. Evaluate filters in insertion order. Stop if none rejects.
//! 4. Otherwise move the origin to the hit, ignore the hit object, and go to 1.
//!
//! Filters never see the result of the cast that reaches the limit, and never
//! see a miss.

pub mod engine;
pub mod filter;
pub mod result;
pub mod shape;

pub use engine::Trace;
pub use filter::{Filter, FilterChain, accept_only_tagged, reject_tagged};
pub use result::{Surface, TraceResult};
pub use shape::{Block, Ray, Shape, Sphere};

//! Hit filters and the ordered chain a trace evaluates after each cast.

use crate::scene::{Hierarchy, ObjectId, TagRegistry};
use crate::trace::TraceResult;

/// Decides whether a hit is rejected.
///
/// Returning `true` rejects the hit and makes the trace cast again past it;
/// `false` accepts it. The decision should depend only on the result passed in.
pub type Filter<'s> = Box<dyn Fn(&TraceResult) -> bool + 's>;

/// Filters in insertion order.
#[derive(Default)]
pub struct FilterChain<'s> {
    filters: Vec<Filter<'s>>,
}

impl<'s> FilterChain<'s> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn push<F>(&mut self, filter: F)
    where
        F: Fn(&TraceResult) -> bool + 's,
    {
        self.filters.push(Box::new(filter));
    }

    pub fn push_boxed(&mut self, filter: Filter<'s>) {
        self.filters.push(filter);
    }

    /// True if any filter rejects `result`. Filters after the first rejecting
    /// one are not called.
    pub fn rejects(&self, result: &TraceResult) -> bool {
        self.filters.iter().any(|filter| filter(result))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl std::fmt::Debug for FilterChain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("len", &self.filters.len())
            .finish()
    }
}

fn tagged_snapshot<S>(scene: &S, tag: &str, include_descendants: bool) -> Vec<ObjectId>
where
    S: TagRegistry + ?Sized,
{
    if include_descendants {
        scene.objects_with_tag(tag)
    } else {
        Vec::new()
    }
}

fn under_any<S>(scene: &S, object: ObjectId, ancestors: &[ObjectId]) -> bool
where
    S: Hierarchy + ?Sized,
{
    ancestors
        .iter()
        .any(|&ancestor| scene.is_descendant_of(object, ancestor))
}

/// Builds a filter that rejects everything except objects carrying `tag`.
///
/// With `include_descendants`, descendants of objects that carried `tag` when
/// this function was called are accepted too. Misses are rejected.
pub fn accept_only_tagged<'s, S>(scene: &'s S, tag: &str, include_descendants: bool) -> Filter<'s>
where
    S: TagRegistry + Hierarchy + ?Sized,
{
    let tag = tag.to_owned();
    let tagged = tagged_snapshot(scene, &tag, include_descendants);
    Box::new(move |result: &TraceResult| match result.hit() {
        None => true,
        Some(object) if scene.has_tag(object, &tag) => false,
        Some(object) => !under_any(scene, object, &tagged),
    })
}

/// Builds a filter that rejects objects carrying `tag`.
///
/// With `include_descendants`, descendants of objects that carried `tag` when
/// this function was called are rejected too. Misses are accepted.
pub fn reject_tagged<'s, S>(scene: &'s S, tag: &str, include_descendants: bool) -> Filter<'s>
where
    S: TagRegistry + Hierarchy + ?Sized,
{
    let tag = tag.to_owned();
    let tagged = tagged_snapshot(scene, &tag, include_descendants);
    Box::new(move |result: &TraceResult| match result.hit() {
        None => false,
        Some(object) if scene.has_tag(object, &tag) => true,
        Some(object) => under_any(scene, object, &tagged),
    })
}

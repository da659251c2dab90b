//! Tag and hierarchy queries used by tag filters.

use crate::scene::ObjectId;

/// Answers which scene objects carry a caller-defined tag.
pub trait TagRegistry {
    /// Snapshot of every object currently carrying `tag`.
    fn objects_with_tag(&self, tag: &str) -> Vec<ObjectId>;

    /// Whether `object` currently carries `tag`.
    ///
    /// The default implementation scans [`TagRegistry::objects_with_tag`];
    /// override it when the host can answer directly.
    fn has_tag(&self, object: ObjectId, tag: &str) -> bool {
        self.objects_with_tag(tag).contains(&object)
    }
}

/// Parent/child relation between scene objects.
pub trait Hierarchy {
    /// True if `object` sits anywhere below `ancestor`. An object is not its
    /// own descendant.
    fn is_descendant_of(&self, object: ObjectId, ancestor: ObjectId) -> bool;
}

impl<R: TagRegistry + ?Sized> TagRegistry for &R {
    fn objects_with_tag(&self, tag: &str) -> Vec<ObjectId> {
        (**self).objects_with_tag(tag)
    }

    fn has_tag(&self, object: ObjectId, tag: &str) -> bool {
        (**self).has_tag(object, tag)
    }
}

impl<H: Hierarchy + ?Sized> Hierarchy for &H {
    fn is_descendant_of(&self, object: ObjectId, ancestor: ObjectId) -> bool {
        (**self).is_descendant_of(object, ancestor)
    }
}

use crate::math::Vec3;
use crate::scene::{Material, ObjectId, ProbeHit};

/// What a trace found at its final position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// The probe hit scene geometry
    Hit {
        object: ObjectId,
        normal: Vec3,
        material: Material,
    },
    /// The probe travelled its full length without hitting anything
    Miss,
}

/// Outcome of a trace.
///
/// `surface` tells real geometry apart from a miss, so a miss's zero normal
/// and `Air` material can't be mistaken for scene data. The accessors still
/// expose those sentinels for callers that want flat fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceResult {
    /// Hit point, or `origin + direction` on a miss
    pub position: Vec3,
    /// Travelled distance, or the full direction length on a miss
    pub distance: f32,
    pub surface: Surface,
}

impl TraceResult {
    pub(crate) fn from_probe(hit: ProbeHit) -> Self {
        Self {
            position: hit.position,
            distance: hit.distance,
            surface: Surface::Hit {
                object: hit.object,
                normal: hit.normal,
                material: hit.material,
            },
        }
    }

    /// Synthesizes the result of a probe that found nothing.
    pub fn miss(origin: Vec3, direction: Vec3) -> Self {
        Self {
            position: origin + direction,
            distance: direction.length(),
            surface: Surface::Miss,
        }
    }

    pub fn hit(&self) -> Option<ObjectId> {
        match self.surface {
            Surface::Hit { object, .. } => Some(object),
            Surface::Miss => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self.surface, Surface::Hit { .. })
    }

    pub fn is_miss(&self) -> bool {
        !self.is_hit()
    }

    /// Surface normal, or `Vec3::ZERO` on a miss
    pub fn normal(&self) -> Vec3 {
        match self.surface {
            Surface::Hit { normal, .. } => normal,
            Surface::Miss => Vec3::ZERO,
        }
    }

    /// Surface material, or `Material::Air` on a miss
    pub fn material(&self) -> Material {
        match self.surface {
            Surface::Hit { material, .. } => material,
            Surface::Miss => Material::Air,
        }
    }
}

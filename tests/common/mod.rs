#![allow(dead_code)]

use shapetrace::{
    Hierarchy, Material, ObjectId, Pose, ProbeBackend, ProbeHit, ProbeParams, TagRegistry, Vec3,
};
use std::cell::RefCell;
use std::collections::HashMap;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Which backend entry point a cast went through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CastKind {
    Ray,
    Sphere { radius: f32 },
    Block { frame: Pose, half_extents: Vec3 },
}

#[derive(Debug, Clone)]
pub struct CastRecord {
    pub kind: CastKind,
    pub origin: Vec3,
    pub direction: Vec3,
    pub excluded: Vec<ObjectId>,
}

#[derive(Debug, Clone)]
pub struct Wall {
    pub id: ObjectId,
    pub x: f32,
    pub material: Material,
}

/// A corridor along +X made of infinite walls perpendicular to the X axis.
///
/// Every shape is answered the same way: the first non-excluded wall strictly
/// ahead of the origin and within `direction.x` is hit. Parts with no wall are
/// allowed, so tags can sit on "models" that only exist in the hierarchy.
#[derive(Default)]
pub struct CorridorScene {
    walls: Vec<Wall>,
    tags: HashMap<ObjectId, Vec<String>>,
    parents: HashMap<ObjectId, ObjectId>,
    casts: RefCell<Vec<CastRecord>>,
}

impl CorridorScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walls `1..=count` at x = 10, 20, 30, ...
    pub fn with_walls(count: u64) -> Self {
        let mut scene = Self::new();
        scene.walls = (1..=count)
            .map(|i| Wall {
                id: ObjectId(i),
                x: i as f32 * 10.0,
                material: Material::Concrete,
            })
            .collect();
        scene
    }

    pub fn add_wall(&mut self, id: u64, x: f32, material: Material) -> &mut Self {
        self.walls.push(Wall {
            id: ObjectId(id),
            x,
            material,
        });
        self.walls.sort_by(|a, b| a.x.total_cmp(&b.x));
        self
    }

    pub fn tag(&mut self, id: u64, tag: &str) -> &mut Self {
        self.tags
            .entry(ObjectId(id))
            .or_default()
            .push(tag.to_owned());
        self
    }

    pub fn set_parent(&mut self, child: u64, parent: u64) -> &mut Self {
        self.parents.insert(ObjectId(child), ObjectId(parent));
        self
    }

    pub fn casts(&self) -> Vec<CastRecord> {
        self.casts.borrow().clone()
    }

    pub fn cast_count(&self) -> usize {
        self.casts.borrow().len()
    }

    fn probe(
        &self,
        kind: CastKind,
        origin: Vec3,
        direction: Vec3,
        params: &ProbeParams,
    ) -> Option<ProbeHit> {
        self.casts.borrow_mut().push(CastRecord {
            kind,
            origin,
            direction,
            excluded: params.excluded.iter().collect(),
        });

        let reach = origin.x + direction.x;
        self.walls
            .iter()
            .filter(|wall| !params.excluded.contains(wall.id))
            .find(|wall| wall.x > origin.x && wall.x <= reach)
            .map(|wall| {
                ProbeHit::new(
                    Vec3::new(wall.x, origin.y, origin.z),
                    wall.id,
                    Vec3::NEG_X,
                    wall.material,
                    wall.x - origin.x,
                )
            })
    }
}

impl ProbeBackend for CorridorScene {
    fn raycast(&self, origin: Vec3, direction: Vec3, params: &ProbeParams) -> Option<ProbeHit> {
        self.probe(CastKind::Ray, origin, direction, params)
    }

    fn spherecast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        params: &ProbeParams,
    ) -> Option<ProbeHit> {
        self.probe(CastKind::Sphere { radius }, origin, direction, params)
    }

    fn blockcast(
        &self,
        frame: Pose,
        half_extents: Vec3,
        direction: Vec3,
        params: &ProbeParams,
    ) -> Option<ProbeHit> {
        self.probe(
            CastKind::Block {
                frame,
                half_extents,
            },
            frame.position,
            direction,
            params,
        )
    }
}

impl TagRegistry for CorridorScene {
    fn objects_with_tag(&self, tag: &str) -> Vec<ObjectId> {
        self.tags
            .iter()
            .filter(|(_, tags)| tags.iter().any(|t| t == tag))
            .map(|(id, _)| *id)
            .collect()
    }
}

impl Hierarchy for CorridorScene {
    fn is_descendant_of(&self, object: ObjectId, ancestor: ObjectId) -> bool {
        let mut current = object;
        while let Some(&parent) = self.parents.get(&current) {
            if parent == ancestor {
                return true;
            }
            current = parent;
        }
        false
    }
}

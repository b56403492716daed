//! World geometry компоненты: StaticObstacle, LocalGeometry

use bevy::prelude::*;

/// Маркер: статическая геометрия для collision (house)
///
/// Transform после placement не меняется; bounding volume всё равно
/// пересчитывается на каждый запрос (дочерние nodes типа двери двигаются).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct StaticObstacle;

/// AABB меша в локальном пространстве node
///
/// Заполняется loader'ом (glTF mesh AABB в клиенте, scene description в headless).
/// Node без LocalGeometry геометрии не имеет — просто transform-узел.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LocalGeometry {
    pub min: Vec3,
    pub max: Vec3,
}

impl LocalGeometry {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Box с центром в origin node
    pub fn from_half_extents(half_extents: Vec3) -> Self {
        Self::new(-half_extents, half_extents)
    }

    /// 8 углов box (local space)
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }
}

//! Bounding-volume tracker
//!
//! World-space AABB для node и всех его потомков.
//! Никакого кэша: каждый вызов заново проходит иерархию (ChildOf вверх для transform,
//! Children вниз для геометрии). Вызывается 1-2 раза на input событие, не на кадр.
//!
//! GlobalTransform не используется: transform propagation идёт в PostUpdate,
//! а collision нужно свежее значение сразу после tentative move в том же событии.

use bevy::math::bounding::{Aabb3d, BoundingVolume};
use bevy::math::Vec3A;
use bevy::prelude::*;

use crate::components::LocalGeometry;

/// World transform node = композиция Transform по цепочке ChildOf
///
/// None если у entity нет Transform (despawned / не scene node).
pub fn world_transform_of(world: &World, entity: Entity) -> Option<GlobalTransform> {
    let mut global = GlobalTransform::from(*world.get::<Transform>(entity)?);
    let mut current = entity;

    while let Some(child_of) = world.get::<ChildOf>(current) {
        let parent = child_of.parent();
        let Some(parent_transform) = world.get::<Transform>(parent) else {
            break;
        };
        global = GlobalTransform::from(*parent_transform) * global;
        current = parent;
    }

    Some(global)
}

/// Минимальный world-space AABB всей геометрии под node
///
/// Node без геометрии (ни на себе, ни в потомках) → вырожденный box в world origin node.
/// Entity без Transform → вырожденный box в нуле.
pub fn bounding_volume_of(world: &World, entity: Entity) -> Aabb3d {
    let Some(root_global) = world_transform_of(world, entity) else {
        return degenerate_at(Vec3::ZERO);
    };

    let mut volume: Option<Aabb3d> = None;
    let mut stack = vec![(entity, root_global)];

    while let Some((node, global)) = stack.pop() {
        if let Some(geometry) = world.get::<LocalGeometry>(node) {
            let node_volume = transformed_geometry(&global, geometry);
            volume = Some(match volume {
                Some(acc) => acc.merge(&node_volume),
                None => node_volume,
            });
        }

        if let Some(children) = world.get::<Children>(node) {
            for child in children.to_vec() {
                if let Some(child_transform) = world.get::<Transform>(child) {
                    stack.push((child, global * GlobalTransform::from(*child_transform)));
                }
            }
        }
    }

    volume.unwrap_or_else(|| degenerate_at(root_global.translation()))
}

/// AABB локального box после affine transform (8 углов → min/max)
fn transformed_geometry(global: &GlobalTransform, geometry: &LocalGeometry) -> Aabb3d {
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);

    for corner in geometry.corners() {
        let point = global.transform_point(corner);
        min = min.min(point);
        max = max.max(point);
    }

    Aabb3d {
        min: Vec3A::from(min),
        max: Vec3A::from(max),
    }
}

fn degenerate_at(point: Vec3) -> Aabb3d {
    Aabb3d {
        min: Vec3A::from(point),
        max: Vec3A::from(point),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_node(world: &mut World, transform: Transform, geometry: Option<LocalGeometry>) -> Entity {
        let mut node = world.spawn(transform);
        if let Some(geometry) = geometry {
            node.insert(geometry);
        }
        node.id()
    }

    #[test]
    fn test_single_node_translated() {
        let mut world = World::new();
        let node = spawn_node(
            &mut world,
            Transform::from_xyz(1.0, 0.0, -2.0),
            Some(LocalGeometry::from_half_extents(Vec3::splat(0.5))),
        );

        let volume = bounding_volume_of(&world, node);
        assert_eq!(volume.min, Vec3A::new(0.5, -0.5, -2.5));
        assert_eq!(volume.max, Vec3A::new(1.5, 0.5, -1.5));
    }

    #[test]
    fn test_scale_applies_to_geometry() {
        let mut world = World::new();
        let node = spawn_node(
            &mut world,
            Transform::from_scale(Vec3::splat(90.0)),
            Some(LocalGeometry::new(Vec3::ZERO, Vec3::new(0.01, 0.02, 0.01))),
        );

        let volume = bounding_volume_of(&world, node);
        assert!((volume.max.y - 1.8).abs() < 1e-5, "max.y = {}", volume.max.y);
        assert!((volume.max.x - 0.9).abs() < 1e-5, "max.x = {}", volume.max.x);
    }

    #[test]
    fn test_children_merged_in_parent_space() {
        let mut world = World::new();
        let root = spawn_node(&mut world, Transform::from_xyz(10.0, 0.0, 0.0), None);
        let left = world
            .spawn((
                Transform::from_xyz(-1.0, 0.0, 0.0),
                LocalGeometry::from_half_extents(Vec3::splat(0.5)),
                ChildOf(root),
            ))
            .id();
        world.spawn((
            Transform::from_xyz(2.0, 0.0, 0.0),
            LocalGeometry::from_half_extents(Vec3::splat(0.5)),
            ChildOf(root),
        ));

        let volume = bounding_volume_of(&world, root);
        assert_eq!(volume.min.x, 8.5);
        assert_eq!(volume.max.x, 12.5);

        // Bounding volume дочернего node — только его геометрия, в world space
        let left_volume = bounding_volume_of(&world, left);
        assert_eq!(left_volume.min.x, 8.5);
        assert_eq!(left_volume.max.x, 9.5);
    }

    #[test]
    fn test_rotated_geometry_expands_box() {
        let mut world = World::new();
        let node = spawn_node(
            &mut world,
            Transform::from_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4)),
            Some(LocalGeometry::from_half_extents(Vec3::new(1.0, 1.0, 1.0))),
        );

        let volume = bounding_volume_of(&world, node);
        let diagonal = 2.0_f32.sqrt();
        assert!((volume.max.x - diagonal).abs() < 1e-5);
        assert!((volume.max.z - diagonal).abs() < 1e-5);
    }

    #[test]
    fn test_no_geometry_is_degenerate() {
        let mut world = World::new();
        let node = spawn_node(&mut world, Transform::from_xyz(3.0, 1.0, 2.0), None);

        let volume = bounding_volume_of(&world, node);
        assert_eq!(volume.min, volume.max);
        assert_eq!(volume.min, Vec3A::new(3.0, 1.0, 2.0));
    }

    #[test]
    fn test_recomputed_after_mutation() {
        let mut world = World::new();
        let node = spawn_node(
            &mut world,
            Transform::IDENTITY,
            Some(LocalGeometry::from_half_extents(Vec3::splat(0.5))),
        );
        let before = bounding_volume_of(&world, node);

        world.get_mut::<Transform>(node).unwrap().translation.z += 1.0;
        let after = bounding_volume_of(&world, node);

        assert_eq!(after.min.z, before.min.z + 1.0);
    }

    #[test]
    fn test_world_transform_composes_parents() {
        let mut world = World::new();
        let root = world
            .spawn(Transform::from_xyz(0.0, 0.0, 5.0).with_scale(Vec3::splat(2.0)))
            .id();
        let child = world.spawn((Transform::from_xyz(1.0, 0.0, 0.0), ChildOf(root))).id();

        let global = world_transform_of(&world, child).unwrap();
        assert_eq!(global.translation(), Vec3::new(2.0, 0.0, 5.0));
    }
}

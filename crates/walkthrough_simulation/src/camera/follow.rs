//! Camera follow rule

use bevy::prelude::*;

use crate::components::{FollowCamera, ViewAdjustment};

/// Camera transform из позиции аватара (детерминированно, без state)
///
/// position = avatar + offset, смотрит на аватара (up = +Y).
pub fn derive_camera_transform(avatar_position: Vec3, offset: Vec3) -> Transform {
    Transform::from_translation(avatar_position + offset).looking_at(avatar_position, Vec3::Y)
}

/// Snap всех FollowCamera к текущей позиции аватара
///
/// Пишет и `last_follow`, и Transform — чтобы камера двигалась даже без ViewAdjustment.
pub fn snap_follow_cameras(world: &mut World, avatar_position: Vec3) {
    let mut cameras = world.query::<(&mut FollowCamera, &mut Transform, Option<&ViewAdjustment>)>();
    for (mut follow, mut transform, adjustment) in cameras.iter_mut(world) {
        follow.last_follow = derive_camera_transform(avatar_position, follow.offset);
        *transform = compose_view(&follow.last_follow, adjustment.copied().unwrap_or_default());
    }
}

/// Follow результат + free-look (yaw вокруг world Y, pitch вокруг локальной X)
pub fn compose_view(base: &Transform, adjustment: ViewAdjustment) -> Transform {
    let rotation = Quat::from_rotation_y(adjustment.yaw) * base.rotation * Quat::from_rotation_x(adjustment.pitch);
    Transform {
        rotation,
        ..*base
    }
}

/// Система: наложить free-look на последний follow результат
///
/// FrameSet::ViewControls — после proximity/animation, до рендера.
pub fn apply_view_adjustment(
    mut cameras: Query<(&FollowCamera, &ViewAdjustment, &mut Transform)>,
) {
    for (follow, adjustment, mut transform) in cameras.iter_mut() {
        let composed = compose_view(&follow.last_follow, *adjustment);
        if *transform != composed {
            *transform = composed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSET: Vec3 = Vec3::new(0.0, 1.6, 5.0);

    #[test]
    fn test_camera_offset_from_avatar() {
        let camera = derive_camera_transform(Vec3::new(0.0, 0.0, 0.1), OFFSET);
        assert!((camera.translation - Vec3::new(0.0, 1.6, 5.1)).length() < 1e-6);

        // Камера смотрит на аватара
        let to_avatar = (Vec3::new(0.0, 0.0, 0.1) - camera.translation).normalize();
        assert!(camera.forward().dot(to_avatar) > 0.9999);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let position = Vec3::new(1.25, 0.0, -3.5);
        let first = derive_camera_transform(position, OFFSET);

        // История вызовов не влияет
        derive_camera_transform(Vec3::new(100.0, 5.0, 0.0), OFFSET);
        let second = derive_camera_transform(position, OFFSET);

        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_adjustment_keeps_follow() {
        let base = derive_camera_transform(Vec3::ZERO, OFFSET);
        let composed = compose_view(&base, ViewAdjustment::default());
        assert_eq!(composed.translation, base.translation);
        assert_eq!(composed.rotation, base.rotation);
    }

    #[test]
    fn test_adjustment_rotates_not_translates() {
        let base = derive_camera_transform(Vec3::ZERO, OFFSET);
        let composed = compose_view(&base, ViewAdjustment { yaw: 0.5, pitch: 0.0 });
        assert_eq!(composed.translation, base.translation);
        assert!(composed.rotation.angle_between(base.rotation) > 0.4);
    }

    #[test]
    fn test_snap_updates_all_follow_cameras() {
        let mut world = World::new();
        let camera = world
            .spawn((FollowCamera::new(OFFSET), Transform::IDENTITY))
            .id();

        snap_follow_cameras(&mut world, Vec3::new(0.0, 0.0, -5.0));

        let transform = world.get::<Transform>(camera).unwrap();
        assert!((transform.translation - Vec3::new(0.0, 1.6, 0.0)).length() < 1e-6);
        let follow = world.get::<FollowCamera>(camera).unwrap();
        assert_eq!(follow.last_follow, *transform);
    }
}

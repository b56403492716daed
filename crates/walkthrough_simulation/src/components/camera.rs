//! Camera компоненты: FollowCamera + ViewAdjustment (free-look)

use bevy::prelude::*;

/// Камера, привязанная к аватару фиксированным offset
///
/// `last_follow` — последний результат derive_camera_transform.
/// Free-look (ViewAdjustment) накладывается поверх него, а не поверх текущего Transform,
/// поэтому follow не затирает ручной look и наоборот.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct FollowCamera {
    pub offset: Vec3,
    pub last_follow: Transform,
}

impl FollowCamera {
    pub fn new(offset: Vec3) -> Self {
        Self {
            offset,
            last_follow: Transform::from_translation(offset),
        }
    }
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.6, 5.0))
    }
}

/// Внешний free-look поверх follow результата (радианы)
///
/// Пишется input слоем клиента (мышь / XR), применяется в FrameSet::ViewControls.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ViewAdjustment {
    pub yaw: f32,
    pub pitch: f32,
}

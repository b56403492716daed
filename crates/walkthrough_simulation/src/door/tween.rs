//! Rotation tween (yaw) — linear, как tween.js по умолчанию

use std::time::Duration;

use bevy::prelude::*;

/// Активная анимация yaw node
///
/// start_yaw фиксируется в момент старта (текущий yaw node).
/// X/Z компоненты Euler (XYZ) сохраняются, меняется только Y.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct RotationTween {
    pub start_yaw: f32,
    pub target_yaw: f32,
    pub duration: Duration,
    pub elapsed: Duration,
}

impl RotationTween {
    pub fn new(start_yaw: f32, target_yaw: f32, duration: Duration) -> Self {
        Self {
            start_yaw,
            target_yaw,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Прогресс 0..=1 (нулевая длительность — сразу 1)
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Текущее значение yaw (на финише — ровно target)
    pub fn current_yaw(&self) -> f32 {
        if self.is_finished() {
            return self.target_yaw;
        }
        self.start_yaw + (self.target_yaw - self.start_yaw) * self.progress()
    }

    /// Продвинуть elapsed (монотонно, не дальше duration)
    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = (self.elapsed + delta).min(self.duration);
    }
}

/// Yaw (Euler XYZ, Y компонента)
pub fn yaw_of(rotation: Quat) -> f32 {
    let (_, yaw, _) = rotation.to_euler(EulerRot::XYZ);
    yaw
}

/// Rotation с заменённым yaw (X/Z сохраняются)
pub fn with_yaw(rotation: Quat, yaw: f32) -> Quat {
    let (x, _, z) = rotation.to_euler(EulerRot::XYZ);
    Quat::from_euler(EulerRot::XYZ, x, yaw, z)
}

/// Система: advance всех RotationTween и запись yaw в Transform
///
/// Завершённые tweens снимаются (компонент удаляется).
pub fn advance_rotation_tweens(
    mut commands: Commands,
    mut tweens: Query<(Entity, &mut RotationTween, &mut Transform)>,
    time: Res<Time>,
) {
    let delta = time.delta();

    for (entity, mut tween, mut transform) in tweens.iter_mut() {
        tween.advance(delta);
        transform.rotation = with_yaw(transform.rotation, tween.current_yaw());

        if tween.is_finished() {
            commands.entity(entity).remove::<RotationTween>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_linear_progress() {
        let mut tween = RotationTween::new(0.0, FRAC_PI_2, Duration::from_millis(1000));
        assert_eq!(tween.current_yaw(), 0.0);

        tween.advance(Duration::from_millis(500));
        assert!((tween.current_yaw() - FRAC_PI_2 / 2.0).abs() < 1e-6);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_clamped_at_target() {
        let mut tween = RotationTween::new(0.0, FRAC_PI_2, Duration::from_millis(1000));
        tween.advance(Duration::from_millis(1500));

        assert!(tween.is_finished());
        assert_eq!(tween.elapsed, Duration::from_millis(1000));
        assert_eq!(tween.current_yaw(), FRAC_PI_2);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let tween = RotationTween::new(0.3, 1.0, Duration::ZERO);
        assert!(tween.is_finished());
        assert_eq!(tween.progress(), 1.0);
        assert_eq!(tween.current_yaw(), 1.0);
    }

    #[test]
    fn test_with_yaw_preserves_other_axes() {
        let rotation = Quat::from_euler(EulerRot::XYZ, 0.2, 0.0, -0.1);
        let rotated = with_yaw(rotation, 0.7);
        let (x, y, z) = rotated.to_euler(EulerRot::XYZ);

        assert!((x - 0.2).abs() < 1e-5);
        assert!((y - 0.7).abs() < 1e-5);
        assert!((z + 0.1).abs() < 1e-5);
    }
}

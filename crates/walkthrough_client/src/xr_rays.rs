use bevy::prelude::*;
use bevy::transform::TransformSystem;
use walkthrough_simulation::xr::{spawn_xr_input_sources, PointerRay, XrInputSource, XrSourceKind};

/// XR attachment points + отрисовка pointer лучей и маркеров grip / hand
///
/// Pose контроллеров пишет XR платформа, здесь только визуал.
pub struct XrRaysPlugin;

impl Plugin for XrRaysPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_xr_sources).add_systems(
            PostUpdate,
            (draw_pointer_rays, draw_source_markers).after(TransformSystem::TransformPropagate),
        );
    }
}

/// Форма gizmo маркера XR source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceMarker {
    /// Модель контроллера в grip space
    Cube { size: f32 },
    /// Ладонь (hand tracking)
    Sphere { radius: f32 },
}

/// Маркер для source (контроллеры рисуются лучом, без маркера)
pub fn marker_for(kind: XrSourceKind) -> Option<SourceMarker> {
    match kind {
        XrSourceKind::Controller => None,
        XrSourceKind::Grip => Some(SourceMarker::Cube { size: 0.08 }),
        XrSourceKind::Hand => Some(SourceMarker::Sphere { radius: 0.05 }),
    }
}

fn setup_xr_sources(mut commands: Commands) {
    spawn_xr_input_sources(&mut commands);
}

fn draw_pointer_rays(mut gizmos: Gizmos, rays: Query<(&GlobalTransform, &PointerRay)>) {
    for (transform, ray) in rays.iter() {
        let start = transform.translation();
        let end = transform.transform_point(ray.local_end());
        gizmos.line(start, end, Color::WHITE);
    }
}

fn draw_source_markers(mut gizmos: Gizmos, sources: Query<(&GlobalTransform, &XrInputSource)>) {
    for (transform, source) in sources.iter() {
        let (_, rotation, translation) = transform.to_scale_rotation_translation();
        match marker_for(source.kind) {
            Some(SourceMarker::Cube { size }) => {
                let cube = Transform::from_translation(translation)
                    .with_rotation(rotation)
                    .with_scale(Vec3::splat(size));
                gizmos.cuboid(cube, Color::srgb(0.6, 0.8, 1.0));
            }
            Some(SourceMarker::Sphere { radius }) => {
                gizmos.sphere(Isometry3d::new(translation, rotation), radius, Color::srgb(1.0, 0.8, 0.6));
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grips_and_hands_get_markers() {
        assert_eq!(marker_for(XrSourceKind::Grip), Some(SourceMarker::Cube { size: 0.08 }));
        assert_eq!(marker_for(XrSourceKind::Hand), Some(SourceMarker::Sphere { radius: 0.05 }));
    }

    #[test]
    fn test_controllers_drawn_by_ray_only() {
        assert_eq!(marker_for(XrSourceKind::Controller), None);
    }
}

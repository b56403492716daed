//! XR input sources — opaque attachment points
//!
//! Session negotiation и pose tracking принадлежат XR платформе.
//! Core только спавнит nodes контроллеров / grips / рук и вешает на контроллеры
//! pointer ray (визуал, никакой логики).

use bevy::prelude::*;

/// Тип XR input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum XrSourceKind {
    /// Target ray space контроллера
    Controller,
    /// Grip space (модель контроллера)
    Grip,
    /// Hand tracking
    Hand,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct XrInputSource {
    pub kind: XrSourceKind,
    /// 0 / 1 (левый / правый в порядке платформы)
    pub index: u8,
}

/// Луч-указатель вдоль локальной -Z
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PointerRay {
    pub length: f32,
}

impl Default for PointerRay {
    fn default() -> Self {
        Self { length: 5.0 }
    }
}

impl PointerRay {
    /// Конец луча в локальном пространстве контроллера
    pub fn local_end(&self) -> Vec3 {
        Vec3::NEG_Z * self.length
    }
}

/// Spawn двух контроллеров (с лучами), двух grips и двух рук
pub fn spawn_xr_input_sources(commands: &mut Commands) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity(8);

    for index in 0..2u8 {
        let controller = commands
            .spawn((
                Name::new(format!("xr_controller_{index}")),
                XrInputSource { kind: XrSourceKind::Controller, index },
                Transform::default(),
            ))
            .id();
        let ray = commands
            .spawn((
                Name::new("line"),
                PointerRay::default(),
                Transform::default(),
                ChildOf(controller),
            ))
            .id();
        spawned.extend([controller, ray]);

        for kind in [XrSourceKind::Grip, XrSourceKind::Hand] {
            let entity = commands
                .spawn((
                    Name::new(format!("xr_{kind:?}_{index}").to_lowercase()),
                    XrInputSource { kind, index },
                    Transform::default(),
                ))
                .id();
            spawned.push(entity);
        }
    }

    spawned
}

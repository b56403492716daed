//! Avatar component

use bevy::prelude::*;

/// Управляемый игроком аватар
///
/// Вешается на root node avatar-ассета когда ОБА ассета загружены (load barrier).
/// Transform меняет только movement controller (apply_directional_input).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Avatar {
    /// Шаг за одно input событие (world units)
    pub step: f32,
}

impl Default for Avatar {
    fn default() -> Self {
        Self { step: 0.1 }
    }
}

//! Frame driver — порядок систем внутри кадра
//!
//! Update (раз в кадр, рендер Bevy идёт после Update):
//! 1. Load — join completion сигналов ассетов (только пока Loading)
//! 2. Input — дренируем DirectionalInput: move → collision → camera follow
//! 3. Proximity — door trigger (до Animation: новый tween получает advance в этом же кадре)
//! 4. Animation — advance всех RotationTween
//! 5. ViewControls — free-look поверх follow (после follow, чтобы ручной look не затирался)

use bevy::prelude::*;

use crate::camera::apply_view_adjustment;
use crate::door::{advance_rotation_tweens, tick_proximity};
use crate::movement::process_directional_input;
use crate::scene::{join_loaded_assets, session_loading, session_running};

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Load,
    Input,
    Proximity,
    Animation,
    ViewControls,
}

/// Plugin: регистрация sets в фиксированном порядке + core системы
pub struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSet::Load.run_if(session_loading),
                FrameSet::Input.run_if(session_running),
                FrameSet::Proximity.run_if(session_running),
                FrameSet::Animation.run_if(session_running),
                FrameSet::ViewControls.run_if(session_running),
            )
                .chain(), // Последовательное выполнение
        );

        app.add_systems(Update, join_loaded_assets.in_set(FrameSet::Load))
            .add_systems(Update, process_directional_input.in_set(FrameSet::Input))
            .add_systems(Update, tick_proximity.in_set(FrameSet::Proximity))
            .add_systems(Update, advance_rotation_tweens.in_set(FrameSet::Animation))
            .add_systems(Update, apply_view_adjustment.in_set(FrameSet::ViewControls));
    }
}

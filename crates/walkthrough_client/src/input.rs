use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::mouse::MouseMotion;
use bevy::input::ButtonState;
use bevy::prelude::*;
use walkthrough_simulation::config::InputBindings;
use walkthrough_simulation::{
    Direction, DirectionalInput, FrameSet, ViewAdjustment, WalkthroughConfig,
};

/// Keyboard → DirectionalInput, right-drag → free-look
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LookSettings>().add_systems(
            Update,
            (keyboard_to_directional_input, mouse_look).before(FrameSet::Input),
        );
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct LookSettings {
    pub sensitivity: f32,
}

impl Default for LookSettings {
    fn default() -> Self {
        Self { sensitivity: 0.005 }
    }
}

/// Каждое keydown (включая auto-repeat) = одно DirectionalInput
fn keyboard_to_directional_input(
    mut keys: EventReader<KeyboardInput>,
    config: Res<WalkthroughConfig>,
    mut directional: EventWriter<DirectionalInput>,
) {
    for key in keys.read() {
        if key.state != ButtonState::Pressed {
            continue;
        }
        if let Some(direction) = direction_for_key(&config.input, &key.logical_key) {
            directional.write(DirectionalInput(direction));
        }
    }
}

/// Логическая клавиша → направление (точное совпадение символа, регистр важен)
fn direction_for_key(bindings: &InputBindings, key: &Key) -> Option<Direction> {
    let Key::Character(text) = key else {
        return None;
    };
    let mut chars = text.chars();
    let character = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    bindings.direction_for(character)
}

/// Right mouse button: free-look поверх follow
fn mouse_look(
    mut query: Query<&mut ViewAdjustment>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    settings: Res<LookSettings>,
) {
    let mut adjustment = match query.single_mut() {
        Ok(adjustment) => adjustment,
        Err(_) => return,
    };

    if !mouse_buttons.pressed(MouseButton::Right) {
        // Consume motion events even when not looking
        mouse_motion.clear();
        return;
    }

    for motion in mouse_motion.read() {
        adjustment.yaw -= motion.delta.x * settings.sensitivity;
        adjustment.pitch -= motion.delta.y * settings.sensitivity;

        // Clamp pitch to avoid flipping over
        adjustment.pitch = adjustment.pitch.clamp(
            -std::f32::consts::FRAC_PI_2 + 0.1,
            std::f32::consts::FRAC_PI_2 - 0.1,
        );
    }
}

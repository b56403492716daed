//! Movement events

use bevy::prelude::*;

/// Дискретное направление шага (world axes, без учёта камеры)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Direction {
    /// +Z
    Forward,
    /// -Z
    Backward,
    /// -X
    Left,
    /// +X
    Right,
}

impl Direction {
    /// Единичный вектор шага
    pub fn step_vector(self) -> Vec3 {
        match self {
            Direction::Forward => Vec3::Z,
            Direction::Backward => Vec3::NEG_Z,
            Direction::Left => Vec3::NEG_X,
            Direction::Right => Vec3::X,
        }
    }
}

/// Event: key-down с направлением
///
/// Генерируется input source (клиент: клавиатура; headless: key script).
/// Нераспознанные клавиши до события не доходят (InputBindings::direction_for → None).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionalInput(pub Direction);

/// Результат одной попытки шага
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Аватар или house ещё не загружены — no-op
    NotReady,
    Accepted,
    /// Коллизия — transform восстановлен из snapshot
    Rejected,
}

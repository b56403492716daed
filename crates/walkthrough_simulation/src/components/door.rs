//! Door компоненты: Door marker + one-shot TriggerState

use bevy::prelude::*;

/// Маркер: node двери (найдена по имени при индексации house)
///
/// Rotation двери мутабельна, хотя parent (house) статичен.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Door;

/// Состояние proximity trigger двери
///
/// Idle → Triggered когда аватар ближе trigger_distance.
/// Обратного перехода нет: дверь не закрывается, анимация стартует максимум один раз за сессию.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum TriggerState {
    #[default]
    Idle,
    Triggered,
}

impl TriggerState {
    /// Попытка перехода Idle → Triggered
    ///
    /// Возвращает true только на самом переходе (caller стартует анимацию).
    pub fn fire(&mut self) -> bool {
        match self {
            TriggerState::Idle => {
                *self = TriggerState::Triggered;
                true
            }
            TriggerState::Triggered => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_fires_once() {
        let mut state = TriggerState::default();
        assert_eq!(state, TriggerState::Idle);

        assert!(state.fire());
        assert_eq!(state, TriggerState::Triggered);

        // Повторные попытки — no-op
        assert!(!state.fire());
        assert!(!state.fire());
        assert_eq!(state, TriggerState::Triggered);
    }
}

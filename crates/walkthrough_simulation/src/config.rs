//! Walkthrough configuration (RON)
//!
//! Все секции `#[serde(default)]` — пустой файл `()` даёт дефолты оригинальной сцены.
//! Vec3 хранятся как `[f32; 3]` (bevy_math без serialize feature в headless сборке).

use std::f32::consts::FRAC_PI_2;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::logger;
use crate::movement::Direction;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WalkthroughConfig {
    pub movement: MovementConfig,
    pub avatar: AvatarConfig,
    pub camera: CameraConfig,
    pub door: DoorConfig,
    pub assets: AssetsConfig,
    pub input: InputBindings,
    pub scene: SceneConfig,
}

impl WalkthroughConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Загрузить config, при ошибке — warning + дефолты
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                logger::log_warning(&format!("{err}; using default walkthrough config"));
                Self::default()
            }
        }
    }
}

/// Шаг перемещения аватара за одно input событие
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub step: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self { step: 0.1 }
    }
}

/// Placement аватара после загрузки (модель walkcoat1 в сантиметровом масштабе)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub spawn_position: [f32; 3],
    pub scale: f32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            spawn_position: [0.0, 0.0, -5.0],
            scale: 90.0,
        }
    }
}

impl AvatarConfig {
    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from_array(self.spawn_position)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Offset камеры от аватара: 1.6 вверх (рост), 5 назад по +Z
    pub offset: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: [0.0, 1.6, 5.0],
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraConfig {
    pub fn offset(&self) -> Vec3 {
        Vec3::from_array(self.offset)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    /// Имя node двери внутри house (exact match)
    pub node_name: String,
    pub trigger_distance: f32,
    /// Целевой yaw (радианы)
    pub open_angle: f32,
    pub open_duration_ms: u64,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            node_name: "Door".to_string(),
            trigger_distance: 2.0,
            open_angle: FRAC_PI_2,
            open_duration_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub house: String,
    pub avatar: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            house: "old_house.glb".to_string(),
            avatar: "walkcoat1.glb".to_string(),
        }
    }
}

/// Клавиши → направления (всё остальное игнорируется)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBindings {
    pub forward: char,
    pub backward: char,
    pub left: char,
    pub right: char,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            forward: 'w',
            backward: 's',
            left: 'a',
            right: 'd',
        }
    }
}

impl InputBindings {
    pub fn direction_for(&self, key: char) -> Option<Direction> {
        if key == self.forward {
            Some(Direction::Forward)
        } else if key == self.backward {
            Some(Direction::Backward)
        } else if key == self.left {
            Some(Direction::Left)
        } else if key == self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

/// Окружение сцены (фон 0x444444, directional light)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub background: [f32; 3],
    pub light_position: [f32; 3],
    pub light_illuminance: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: [0.267, 0.267, 0.267],
            light_position: [5.0, 10.0, 7.5],
            light_illuminance: 10_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ron_gives_defaults() {
        let config: WalkthroughConfig = ron::from_str("()").unwrap();
        assert_eq!(config, WalkthroughConfig::default());
        assert_eq!(config.movement.step, 0.1);
        assert_eq!(config.door.node_name, "Door");
        assert_eq!(config.door.open_duration_ms, 1000);
    }

    #[test]
    fn test_partial_section_override() {
        let config: WalkthroughConfig =
            ron::from_str("(movement: (step: 0.25), door: (trigger_distance: 3.0))").unwrap();
        assert_eq!(config.movement.step, 0.25);
        assert_eq!(config.door.trigger_distance, 3.0);
        // Остальные поля секции — дефолтные
        assert_eq!(config.door.open_angle, FRAC_PI_2);
        assert_eq!(config.camera.offset(), Vec3::new(0.0, 1.6, 5.0));
    }

    #[test]
    fn test_default_bindings_wasd() {
        let bindings = InputBindings::default();
        assert_eq!(bindings.direction_for('w'), Some(Direction::Forward));
        assert_eq!(bindings.direction_for('s'), Some(Direction::Backward));
        assert_eq!(bindings.direction_for('a'), Some(Direction::Left));
        assert_eq!(bindings.direction_for('d'), Some(Direction::Right));
        assert_eq!(bindings.direction_for('q'), None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WalkthroughConfig::load_from_file("/nonexistent/walkthrough.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = WalkthroughConfig::load_or_default("/nonexistent/walkthrough.ron");
        assert_eq!(config, WalkthroughConfig::default());
    }
}

//! Proximity trigger двери

use std::time::Duration;

use bevy::prelude::*;

use crate::bounds::world_transform_of;
use crate::components::{Avatar, Door, TriggerState};
use crate::config::WalkthroughConfig;
use crate::door::tween::{yaw_of, RotationTween};
use crate::logger;
use crate::scene::SceneIndex;

/// Event: дверь начала открываться (ровно один раз за сессию на дверь)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorOpenStarted {
    pub door: Entity,
}

/// Параметры trigger'а (из DoorConfig)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityRule {
    pub trigger_distance: f32,
    pub open_angle: f32,
    pub open_duration: Duration,
}

impl From<&WalkthroughConfig> for ProximityRule {
    fn from(config: &WalkthroughConfig) -> Self {
        Self {
            trigger_distance: config.door.trigger_distance,
            open_angle: config.door.open_angle,
            open_duration: Duration::from_millis(config.door.open_duration_ms),
        }
    }
}

/// Один proximity check (exclusive — world positions через иерархию)
///
/// Без аватара или двери — no-op. Дистанция меряется между world позициями
/// (дверь — дочерний node house). Возвращает true если анимация стартовала сейчас.
pub fn check_door_proximity(world: &mut World) -> bool {
    let Some(index) = world.get_resource::<SceneIndex>() else {
        return false;
    };
    let (Some(avatar), Some(door)) = (index.avatar, index.door) else {
        return false;
    };
    if world.get::<Avatar>(avatar).is_none() || world.get::<Door>(door).is_none() {
        return false;
    }

    let rule = world
        .get_resource::<WalkthroughConfig>()
        .map(ProximityRule::from)
        .unwrap_or_else(|| ProximityRule::from(&WalkthroughConfig::default()));

    let (Some(avatar_global), Some(door_global)) =
        (world_transform_of(world, avatar), world_transform_of(world, door))
    else {
        return false;
    };
    let distance = avatar_global.translation().distance(door_global.translation());
    if distance >= rule.trigger_distance {
        return false;
    }

    let Some(mut state) = world.get_mut::<TriggerState>(door) else {
        return false;
    };
    if !state.fire() {
        return false;
    }

    let Some(door_transform) = world.get::<Transform>(door).copied() else {
        return false;
    };
    let tween = RotationTween::new(yaw_of(door_transform.rotation), rule.open_angle, rule.open_duration);
    if let Ok(mut entity) = world.get_entity_mut(door) {
        entity.insert(tween);
    }
    world.send_event(DoorOpenStarted { door });

    logger::log_info(&format!(
        "Door {:?} triggered at distance {:.3} (target yaw {:.3} rad over {:?})",
        door, distance, rule.open_angle, rule.open_duration
    ));

    true
}

/// Система: proximity tick (FrameSet::Proximity, раз в кадр)
pub fn tick_proximity(world: &mut World) {
    check_door_proximity(world);
}

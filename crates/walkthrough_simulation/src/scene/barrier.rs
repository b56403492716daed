//! Load barrier — join двух независимых completion сигналов
//!
//! House и avatar грузятся параллельно, порядок завершения не гарантирован.
//! Frame loop (FrameSet::Input и дальше) стартует только когда пришли ОБА.

use bevy::prelude::*;

use crate::camera::snap_follow_cameras;
use crate::components::{Avatar, Door, StaticObstacle, TriggerState};
use crate::config::WalkthroughConfig;
use crate::logger;
use crate::movement::DirectionalInput;
use crate::scene::index::{index_named_nodes, SceneIndex};

/// Роль загруженного ассета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetRole {
    House,
    Avatar,
}

/// Event: ассет загружен и его root node заспавнен
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetLoaded {
    pub role: AssetRole,
    pub root: Entity,
}

/// Фаза сессии
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Loading,
    Running,
}

/// Состояние barrier: какие completion уже пришли
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LoadBarrier {
    pub house: Option<Entity>,
    pub avatar: Option<Entity>,
}

impl LoadBarrier {
    /// Записать completion. false если роль уже была (дубликат игнорируется)
    pub fn record(&mut self, loaded: AssetLoaded) -> bool {
        let slot = match loaded.role {
            AssetRole::House => &mut self.house,
            AssetRole::Avatar => &mut self.avatar,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(loaded.root);
        true
    }

    /// Оба ассета готовы → (house, avatar)
    pub fn joined(&self) -> Option<(Entity, Entity)> {
        Some((self.house?, self.avatar?))
    }
}

/// Run condition: frame loop активен
pub fn session_running(phase: Option<Res<SessionPhase>>) -> bool {
    phase.is_some_and(|phase| *phase == SessionPhase::Running)
}

/// Run condition: ещё ждём ассеты
pub fn session_loading(phase: Option<Res<SessionPhase>>) -> bool {
    !session_running(phase)
}

/// Система: join completion сигналов (FrameSet::Load, пока Loading)
///
/// Exclusive: после join нужен обход иерархии house + placement аватара.
pub fn join_loaded_assets(world: &mut World) {
    let Some(mut events) = world.get_resource_mut::<Events<AssetLoaded>>() else {
        return;
    };
    let loaded: Vec<AssetLoaded> = events.drain().collect();
    if loaded.is_empty() {
        return;
    }

    let mut barrier = world.get_resource::<LoadBarrier>().copied().unwrap_or_default();
    for event in loaded {
        if barrier.record(event) {
            logger::log_info(&format!("{:?} asset ready (root {:?})", event.role, event.root));
        } else {
            logger::log_warning(&format!(
                "Duplicate {:?} completion (root {:?}) ignored",
                event.role, event.root
            ));
        }
    }
    world.insert_resource(barrier);

    let Some((house, avatar)) = barrier.joined() else {
        return;
    };
    complete_session_setup(world, house, avatar);
}

/// Placement аватара, маркировка house/door, индекс, snap камеры, Running
pub fn complete_session_setup(world: &mut World, house: Entity, avatar: Entity) {
    let config = world.get_resource::<WalkthroughConfig>().cloned().unwrap_or_default();

    if let Some(mut transform) = world.get_mut::<Transform>(avatar) {
        transform.translation = config.avatar.spawn_position();
        transform.scale = Vec3::splat(config.avatar.scale);
    }
    if let Ok(mut entity) = world.get_entity_mut(avatar) {
        entity.insert(Avatar {
            step: config.movement.step,
        });
    }
    if let Ok(mut entity) = world.get_entity_mut(house) {
        entity.insert(StaticObstacle);
    }

    let nodes = index_named_nodes(world, house);
    let door = nodes.get(&config.door.node_name).copied();
    match door {
        Some(door) => {
            if let Ok(mut entity) = world.get_entity_mut(door) {
                entity.insert((Door, TriggerState::Idle));
            }
            logger::log_info(&format!("Door node '{}' found: {:?}", config.door.node_name, door));
        }
        None => logger::log_warning(&format!(
            "Door node '{}' not found in house, proximity trigger disabled",
            config.door.node_name
        )),
    }

    let node_count = nodes.len();
    world.insert_resource(SceneIndex {
        avatar: Some(avatar),
        house: Some(house),
        door,
        nodes,
    });

    let avatar_position = world
        .get::<Transform>(avatar)
        .map(|transform| transform.translation)
        .unwrap_or_default();
    snap_follow_cameras(world, avatar_position);

    // Input до загрузки не применяется
    if let Some(mut pending) = world.get_resource_mut::<Events<DirectionalInput>>() {
        pending.clear();
    }

    world.insert_resource(SessionPhase::Running);
    logger::log_info(&format!(
        "Session running: avatar {:?} at {:?}, house {:?} ({} named nodes)",
        avatar, avatar_position, house, node_count
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barrier_needs_both_roles() {
        let mut world = World::new();
        let house = world.spawn_empty().id();
        let avatar = world.spawn_empty().id();

        let mut barrier = LoadBarrier::default();
        assert!(barrier.record(AssetLoaded { role: AssetRole::Avatar, root: avatar }));
        assert_eq!(barrier.joined(), None);

        assert!(barrier.record(AssetLoaded { role: AssetRole::House, root: house }));
        assert_eq!(barrier.joined(), Some((house, avatar)));
    }

    #[test]
    fn test_duplicate_completion_ignored() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();

        let mut barrier = LoadBarrier::default();
        assert!(barrier.record(AssetLoaded { role: AssetRole::House, root: first }));
        assert!(!barrier.record(AssetLoaded { role: AssetRole::House, root: second }));
        assert_eq!(barrier.house, Some(first));
    }
}

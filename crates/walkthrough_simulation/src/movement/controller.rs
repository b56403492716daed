//! Movement controller — шаг аватара с полным rollback при коллизии
//!
//! Порядок на одно input событие:
//! 1. snapshot Transform аватара
//! 2. candidate = snapshot + direction * step (rotation не трогаем)
//! 3. tentative apply (in place)
//! 4. свежие bounding volumes аватара и house
//! 5. resolve
//! 6. Rejected → Transform = snapshot (bit-for-bit)
//! 7. camera follow — ВСЕГДА, даже после rollback

use bevy::prelude::*;

use crate::bounds::bounding_volume_of;
use crate::camera::snap_follow_cameras;
use crate::collision::{resolve, CollisionVerdict};
use crate::components::{Avatar, StaticObstacle};
use crate::logger;
use crate::movement::events::{Direction, DirectionalInput, MoveOutcome};
use crate::scene::SceneIndex;

/// Применить одно направление к аватару
///
/// До загрузки аватара и house — no-op (NotReady), не ошибка.
pub fn apply_directional_input(world: &mut World, direction: Direction) -> MoveOutcome {
    let Some((avatar, house)) = world
        .get_resource::<SceneIndex>()
        .and_then(SceneIndex::avatar_and_house)
    else {
        return MoveOutcome::NotReady;
    };
    if world.get::<StaticObstacle>(house).is_none() {
        return MoveOutcome::NotReady;
    }
    let Some(step) = world.get::<Avatar>(avatar).map(|avatar| avatar.step) else {
        return MoveOutcome::NotReady;
    };
    let Some(mut transform) = world.get_mut::<Transform>(avatar) else {
        return MoveOutcome::NotReady;
    };

    let snapshot = *transform;
    transform.translation += direction.step_vector() * step;

    let avatar_volume = bounding_volume_of(world, avatar);
    let house_volume = bounding_volume_of(world, house);
    let verdict = resolve(&snapshot, &avatar_volume, &house_volume);

    if verdict == CollisionVerdict::Rejected {
        if let Some(mut transform) = world.get_mut::<Transform>(avatar) {
            *transform = snapshot;
        }
    }

    let position = world
        .get::<Transform>(avatar)
        .map(|transform| transform.translation)
        .unwrap_or(snapshot.translation);
    snap_follow_cameras(world, position);

    match verdict {
        CollisionVerdict::Accepted => MoveOutcome::Accepted,
        CollisionVerdict::Rejected => {
            logger::log(&format!(
                "Move {:?} blocked by obstacle, avatar stays at {:?}",
                direction, position
            ));
            MoveOutcome::Rejected
        }
    }
}

/// Система: дренирует очередь DirectionalInput (FrameSet::Input)
///
/// Каждое событие полностью резолвится (move → collision → camera) до следующего,
/// поэтому несколько нажатий между кадрами дают независимые шаги.
pub fn process_directional_input(world: &mut World) {
    let Some(mut events) = world.get_resource_mut::<Events<DirectionalInput>>() else {
        return;
    };
    let inputs: Vec<DirectionalInput> = events.drain().collect();

    for DirectionalInput(direction) in inputs {
        apply_directional_input(world, direction);
    }
}

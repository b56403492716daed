//! Walkthrough Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: аватар ходит по дому, упирается в статическую геометрию,
//! дверь открывается по приближению.
//!
//! HYBRID ARCHITECTURE:
//! - ECS core = movement / collision / camera follow / door trigger (этот crate, headless)
//! - Client = glTF загрузка, клавиатура/мышь, рендер, XR визуалы (walkthrough_client)

use bevy::prelude::*;

pub mod bounds;
pub mod camera;
pub mod collision;
pub mod components;
pub mod config;
pub mod door;
pub mod error;
pub mod frame;
pub mod logger;
pub mod movement;
pub mod scene;
pub mod xr;

pub use bounds::{bounding_volume_of, world_transform_of};
pub use camera::{derive_camera_transform, snap_follow_cameras};
pub use collision::{resolve, CollisionVerdict};
pub use components::*;
pub use config::WalkthroughConfig;
pub use door::{check_door_proximity, DoorOpenStarted, RotationTween};
pub use error::{ConfigError, SceneError};
pub use frame::{FramePlugin, FrameSet};
pub use logger::{log, log_error, log_info, log_warning};
pub use movement::{apply_directional_input, Direction, DirectionalInput, MoveOutcome};
pub use scene::{
    spawn_scene, AssetLoaded, AssetRole, LoadBarrier, SceneDescription, SceneIndex, SessionPhase,
};

/// Главный plugin симуляции
///
/// Config берётся из уже вставленного `WalkthroughConfig` resource (иначе дефолты).
pub struct WalkthroughPlugin;

impl Plugin for WalkthroughPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<WalkthroughConfig>() {
            app.insert_resource(WalkthroughConfig::default());
        }

        app.init_resource::<SessionPhase>()
            .init_resource::<LoadBarrier>()
            .init_resource::<SceneIndex>()
            .add_event::<AssetLoaded>()
            .add_event::<DirectionalInput>()
            .add_event::<DoorOpenStarted>()
            .register_type::<Avatar>()
            .register_type::<LocalGeometry>()
            .register_type::<TriggerState>()
            .register_type::<FollowCamera>()
            .register_type::<ViewAdjustment>()
            .register_type::<RotationTween>()
            .add_plugins(FramePlugin);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(config: WalkthroughConfig) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(config)
        .add_plugins(WalkthroughPlugin);

    app
}

/// Spawn follow camera с offset из config
pub fn spawn_follow_camera(world: &mut World) -> Entity {
    let offset = world
        .get_resource::<WalkthroughConfig>()
        .map(|config| config.camera.offset())
        .unwrap_or(Vec3::new(0.0, 1.6, 5.0));

    world
        .spawn((
            Name::new("follow_camera"),
            FollowCamera::new(offset),
            ViewAdjustment::default(),
            Transform::from_translation(offset),
        ))
        .id()
}

/// Snapshot позиций/поворотов именованных nodes (для сравнения детерминизма)
pub fn transform_snapshot(world: &mut World) -> Vec<(String, [u32; 10])> {
    let mut query = world.query::<(&Name, &Transform)>();
    let mut snapshot: Vec<(String, [u32; 10])> = query
        .iter(world)
        .map(|(name, transform)| {
            let t = transform.translation;
            let r = transform.rotation;
            let s = transform.scale;
            let bits = [
                t.x.to_bits(),
                t.y.to_bits(),
                t.z.to_bits(),
                r.x.to_bits(),
                r.y.to_bits(),
                r.z.to_bits(),
                r.w.to_bits(),
                s.x.to_bits(),
                s.y.to_bits(),
                s.z.to_bits(),
            ];
            (name.as_str().to_string(), bits)
        })
        .collect();

    // Сортировка по имени — порядок query не гарантирован
    snapshot.sort();
    snapshot
}

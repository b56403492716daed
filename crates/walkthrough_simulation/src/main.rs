//! Headless walkthrough
//!
//! Запускает Bevy App без рендера: грузит сцену из RON (или demo), проигрывает
//! скрипт клавиш и логирует итоговое состояние аватара / камеры / двери.

use std::path::PathBuf;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use walkthrough_simulation::logger::{self, LogLevel};
use walkthrough_simulation::{
    create_headless_app, spawn_follow_camera, spawn_scene, AssetLoaded, AssetRole, DirectionalInput,
    FollowCamera, SceneDescription, SceneIndex, WalkthroughConfig,
};

#[derive(Parser, Debug)]
#[command(name = "walkthrough_simulation")]
#[command(about = "Headless house walkthrough (movement / collision / door trigger)", long_about = None)]
struct Cli {
    /// RON config (дефолты если не указан или не читается)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RON scene description дома (иначе demo house)
    #[arg(long)]
    house: Option<PathBuf>,

    /// RON scene description аватара (иначе demo avatar)
    #[arg(long)]
    avatar: Option<PathBuf>,

    /// Клавиши по одной на кадр (w/s/a/d по умолчанию, остальные игнорируются)
    #[arg(long, default_value = "wwwwwwwwwwwwwwwwwwwwwwwwwwwwwwwwwww")]
    script: String,

    /// Сколько кадров прогнать после скрипта (анимация двери)
    #[arg(long, default_value_t = 90)]
    frames: u32,

    /// Длительность кадра (ms)
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// debug / info / warning / error
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    logger::init_logger();
    logger::set_log_level(LogLevel::parse(&cli.log_level).unwrap_or(LogLevel::Info));

    let config = cli
        .config
        .as_ref()
        .map(WalkthroughConfig::load_or_default)
        .unwrap_or_default();
    let bindings = config.input.clone();

    let house_description = load_description(cli.house.as_ref(), SceneDescription::demo_house);
    let avatar_description = load_description(cli.avatar.as_ref(), SceneDescription::demo_avatar);

    let mut app = create_headless_app(config);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(cli.frame_ms)));
    spawn_follow_camera(app.world_mut());

    // Кадр до загрузки (placeholder): core системы ещё неактивны
    app.update();

    // Completion сигналы в "неудобном" порядке: avatar раньше house
    let avatar = spawn_scene(app.world_mut(), &avatar_description);
    app.world_mut().send_event(AssetLoaded { role: AssetRole::Avatar, root: avatar });
    app.update();

    let house = spawn_scene(app.world_mut(), &house_description);
    app.world_mut().send_event(AssetLoaded { role: AssetRole::House, root: house });
    app.update();

    for key in cli.script.chars() {
        if let Some(direction) = bindings.direction_for(key) {
            app.world_mut().send_event(DirectionalInput(direction));
        }
        app.update();
    }

    for _ in 0..cli.frames {
        app.update();
    }

    report(app.world_mut());
}

fn load_description(path: Option<&PathBuf>, fallback: fn() -> SceneDescription) -> SceneDescription {
    let Some(path) = path else {
        return fallback();
    };
    match SceneDescription::load_from_file(path) {
        Ok(description) => description,
        Err(err) => {
            logger::log_error(&format!("{err}; using demo scene"));
            fallback()
        }
    }
}

fn report(world: &mut World) {
    let Some(index) = world.get_resource::<SceneIndex>().cloned() else {
        logger::log_warning("Scene never finished loading");
        return;
    };

    if let Some(avatar) = index.avatar {
        if let Some(transform) = world.get::<Transform>(avatar) {
            logger::log_info(&format!("Avatar position: {:?}", transform.translation));
        }
    }

    let mut cameras = world.query::<(&FollowCamera, &Transform)>();
    for (_, transform) in cameras.iter(world) {
        logger::log_info(&format!(
            "Camera position: {:?}, looking {:?}",
            transform.translation,
            transform.forward()
        ));
    }

    match index.door {
        Some(door) => {
            if let Some(transform) = world.get::<Transform>(door) {
                let (_, yaw, _) = transform.rotation.to_euler(EulerRot::XYZ);
                logger::log_info(&format!("Door yaw: {:.4} rad", yaw));
            }
        }
        None => logger::log_info("No door in scene"),
    }
}

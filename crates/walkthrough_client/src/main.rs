use bevy::prelude::*;
use bevy::window::WindowResized;
use walkthrough_simulation::logger;
use walkthrough_simulation::{FollowCamera, ViewAdjustment, WalkthroughConfig, WalkthroughPlugin};

mod input;
mod loading;
mod xr_rays;

use input::InputPlugin;
use loading::LoadingPlugin;
use xr_rays::XrRaysPlugin;

const CONFIG_PATH: &str = "walkthrough.ron";

fn main() {
    logger::init_logger();
    let config = WalkthroughConfig::load_or_default(CONFIG_PATH);
    let [r, g, b] = config.scene.background;

    App::new()
        // Bevy defaults (rendering, input, glTF, gizmos)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "House Walkthrough".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(r, g, b)))
        .insert_resource(config)
        // Core: barrier, movement, collision, door, camera follow
        .add_plugins(WalkthroughPlugin)
        // glTF → LocalGeometry + AssetLoaded
        .add_plugins(LoadingPlugin)
        // Keyboard / mouse → DirectionalInput / ViewAdjustment
        .add_plugins(InputPlugin)
        .add_plugins(XrRaysPlugin)
        .add_systems(Startup, setup_scene)
        .add_systems(Update, log_window_resize)
        .run();
}

/// Light + follow camera (house / avatar спавнит LoadingPlugin)
fn setup_scene(mut commands: Commands, config: Res<WalkthroughConfig>) {
    let light_position = Vec3::from_array(config.scene.light_position);
    commands.spawn((
        DirectionalLight {
            illuminance: config.scene.light_illuminance,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(light_position).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    // Follow camera: первый snap произойдёт при join ассетов
    let offset = config.camera.offset();
    commands.spawn((
        Name::new("follow_camera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera.fov_degrees.to_radians(),
            near: config.camera.near,
            far: config.camera.far,
            ..default()
        }),
        Transform::from_translation(offset),
        FollowCamera::new(offset),
        ViewAdjustment::default(),
    ));
}

/// Aspect ratio обновляет сам Bevy (camera_system), здесь только лог
fn log_window_resize(mut resized: EventReader<WindowResized>) {
    for event in resized.read() {
        logger::log(&format!("Window resized: {}x{}", event.width, event.height));
    }
}

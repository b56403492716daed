use bevy::prelude::*;
use bevy::render::mesh::MeshAabb;
use bevy::scene::SceneInstanceReady;
use walkthrough_simulation::logger;
use walkthrough_simulation::{AssetLoaded, AssetRole, LocalGeometry, WalkthroughConfig};

/// glTF загрузка house + avatar
///
/// Оба ассета грузятся параллельно, completion каждого — отдельный AssetLoaded.
/// Join делает core (FrameSet::Load), порядок прихода не важен.
pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_asset_loading);
    }
}

/// Какой ассет держит этот SceneRoot
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingAsset(pub AssetRole);

fn start_asset_loading(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<WalkthroughConfig>,
) {
    for (role, path) in [
        (AssetRole::House, config.assets.house.clone()),
        (AssetRole::Avatar, config.assets.avatar.clone()),
    ] {
        logger::log_info(&format!("Loading {:?} from '{}'", role, path));
        let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path));

        commands
            .spawn((
                Name::new(format!("{role:?}")),
                SceneRoot(scene),
                Transform::default(),
                PendingAsset(role),
            ))
            .observe(on_scene_ready);
    }
}

/// Observer: сцена заспавнена → LocalGeometry на меши → AssetLoaded
fn on_scene_ready(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    pending: Query<&PendingAsset>,
    children: Query<&Children>,
    mesh_handles: Query<&Mesh3d>,
    meshes: Res<Assets<Mesh>>,
    mut loaded: EventWriter<AssetLoaded>,
) {
    let root = trigger.target();
    let Ok(&PendingAsset(role)) = pending.get(root) else {
        return;
    };

    let mut with_geometry = 0;
    for descendant in children.iter_descendants(root) {
        let Ok(handle) = mesh_handles.get(descendant) else {
            continue;
        };
        let Some(aabb) = meshes.get(&handle.0).and_then(|mesh| mesh.compute_aabb()) else {
            continue;
        };
        commands.entity(descendant).insert(LocalGeometry::new(
            Vec3::from(aabb.min()),
            Vec3::from(aabb.max()),
        ));
        with_geometry += 1;
    }

    logger::log_info(&format!(
        "{:?} scene ready: {} meshes with geometry",
        role, with_geometry
    ));
    commands.entity(root).remove::<PendingAsset>();
    loaded.write(AssetLoaded { role, root });
}

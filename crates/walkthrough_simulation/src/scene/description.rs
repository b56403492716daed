//! Scene description — headless замена glTF loader'а
//!
//! Дерево nodes в RON: имя, локальный transform, опциональный AABB меша, дети.
//! Клиент строит ту же ECS-форму из glTF (Name + Transform + LocalGeometry + ChildOf).

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::LocalGeometry;
use crate::error::SceneError;

/// Node сцены (рекурсивно)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub name: String,
    #[serde(default)]
    pub translation: [f32; 3],
    /// Yaw (радианы)
    #[serde(default)]
    pub rotation_y: f32,
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
    /// Локальный AABB меша: (min, max)
    #[serde(default)]
    pub geometry: Option<([f32; 3], [f32; 3])>,
    #[serde(default)]
    pub children: Vec<SceneDescription>,
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl SceneDescription {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| SceneError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.translation))
            .with_rotation(Quat::from_rotation_y(self.rotation_y))
            .with_scale(Vec3::from_array(self.scale))
    }

    pub fn local_geometry(&self) -> Option<LocalGeometry> {
        self.geometry
            .map(|(min, max)| LocalGeometry::new(Vec3::from_array(min), Vec3::from_array(max)))
    }

    /// Demo house: стены-коробка 8x3x8, дверь на передней стене (z = -2)
    ///
    /// Петля двери в origin node, полотно по -X: при yaw +π/2 открывается внутрь дома.
    pub fn demo_house() -> Self {
        Self {
            name: "House".to_string(),
            translation: [0.0, 0.0, 0.0],
            rotation_y: 0.0,
            scale: unit_scale(),
            geometry: None,
            children: vec![
                Self::leaf("Walls", [0.0, 1.5, 2.0], ([-4.0, -1.5, -4.0], [4.0, 1.5, 4.0])),
                Self::leaf("Door", [0.0, 1.0, -2.0], ([-0.9, -1.0, -0.05], [0.0, 1.0, 0.05])),
            ],
        }
    }

    /// Demo avatar: человек ~1.8m при scale 90 (модель в сантиметрах)
    pub fn demo_avatar() -> Self {
        Self {
            name: "Avatar".to_string(),
            translation: [0.0, 0.0, 0.0],
            rotation_y: 0.0,
            scale: unit_scale(),
            geometry: None,
            children: vec![Self::leaf(
                "Body",
                [0.0, 0.0, 0.0],
                ([-0.003, 0.0, -0.003], [0.003, 0.02, 0.003]),
            )],
        }
    }

    fn leaf(name: &str, translation: [f32; 3], geometry: ([f32; 3], [f32; 3])) -> Self {
        Self {
            name: name.to_string(),
            translation,
            rotation_y: 0.0,
            scale: unit_scale(),
            geometry: Some(geometry),
            children: Vec::new(),
        }
    }
}

/// Spawn дерева nodes в World, возвращает root entity
pub fn spawn_scene(world: &mut World, description: &SceneDescription) -> Entity {
    spawn_node(world, description, None)
}

fn spawn_node(world: &mut World, description: &SceneDescription, parent: Option<Entity>) -> Entity {
    let mut node = world.spawn((Name::new(description.name.clone()), description.transform()));
    if let Some(geometry) = description.local_geometry() {
        node.insert(geometry);
    }
    if let Some(parent) = parent {
        node.insert(ChildOf(parent));
    }
    let entity = node.id();

    for child in &description.children {
        spawn_node(world, child, Some(entity));
    }

    entity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_node() {
        let description: SceneDescription = ron::from_str(r#"(name: "Empty")"#).unwrap();
        assert_eq!(description.name, "Empty");
        assert_eq!(description.scale, [1.0, 1.0, 1.0]);
        assert!(description.geometry.is_none());
        assert!(description.children.is_empty());
    }

    #[test]
    fn test_parse_nested_with_geometry() {
        let source = r#"(
            name: "House",
            children: [
                (name: "Door", translation: (0.0, 1.0, -2.0), geometry: Some(((0.0, -1.0, -0.05), (0.9, 1.0, 0.05)))),
            ],
        )"#;
        let description: SceneDescription = ron::from_str(source).unwrap();
        assert_eq!(description.children.len(), 1);
        let door = &description.children[0];
        assert_eq!(door.translation, [0.0, 1.0, -2.0]);
        assert_eq!(
            door.local_geometry(),
            Some(LocalGeometry::new(Vec3::new(0.0, -1.0, -0.05), Vec3::new(0.9, 1.0, 0.05)))
        );
    }

    #[test]
    fn test_spawn_builds_hierarchy() {
        let mut world = World::new();
        let root = spawn_scene(&mut world, &SceneDescription::demo_house());

        let children = world.get::<Children>(root).unwrap().to_vec();
        assert_eq!(children.len(), 2);

        let names: Vec<String> = children
            .iter()
            .map(|child| world.get::<Name>(*child).unwrap().as_str().to_string())
            .collect();
        assert!(names.contains(&"Door".to_string()));
        assert!(world.get::<LocalGeometry>(root).is_none());
    }

    #[test]
    fn test_missing_scene_file() {
        let err = SceneDescription::load_from_file("/nonexistent/house.ron").unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
    }
}

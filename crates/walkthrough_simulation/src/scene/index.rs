//! SceneIndex — явная таблица name → Entity
//!
//! Строится один раз после загрузки (полный обход house иерархии).
//! Trigger/movement логика читает только индекс, без обхода иерархии.

use std::collections::HashMap;

use bevy::prelude::*;

/// Индекс ключевых entity сцены
///
/// Инварианты:
/// - avatar Some ⇔ avatar ассет загружен и placement применён
/// - door Some ⇔ node с именем двери найден при обходе house
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneIndex {
    pub avatar: Option<Entity>,
    pub house: Option<Entity>,
    pub door: Option<Entity>,
    pub nodes: HashMap<String, Entity>,
}

impl SceneIndex {
    /// Exact-match lookup
    pub fn find(&self, name: &str) -> Option<Entity> {
        self.nodes.get(name).copied()
    }

    /// (avatar, house) когда оба загружены
    pub fn avatar_and_house(&self) -> Option<(Entity, Entity)> {
        Some((self.avatar?, self.house?))
    }
}

/// Полный depth-first (pre-order) обход от root: Name → Entity
///
/// При повторяющихся именах побеждает последний посещённый node.
pub fn index_named_nodes(world: &World, root: Entity) -> HashMap<String, Entity> {
    let mut nodes = HashMap::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if let Some(name) = world.get::<Name>(node) {
            nodes.insert(name.as_str().to_string(), node);
        }
        if let Some(children) = world.get::<Children>(node) {
            // Обратный порядок на стеке → дети посещаются в исходном порядке
            for child in children.to_vec().into_iter().rev() {
                stack.push(child);
            }
        }
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_nested_nodes() {
        let mut world = World::new();
        let house = world.spawn(Name::new("House")).id();
        let frame = world.spawn((Name::new("Frame"), ChildOf(house))).id();
        let door = world.spawn((Name::new("Door"), ChildOf(frame))).id();

        let nodes = index_named_nodes(&world, house);
        assert_eq!(nodes.get("House"), Some(&house));
        assert_eq!(nodes.get("Door"), Some(&door));
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn test_duplicate_name_last_visited_wins() {
        let mut world = World::new();
        let house = world.spawn(Name::new("House")).id();
        let _first = world.spawn((Name::new("Door"), ChildOf(house))).id();
        let second = world.spawn((Name::new("Door"), ChildOf(house))).id();

        let nodes = index_named_nodes(&world, house);
        assert_eq!(nodes.get("Door"), Some(&second));
    }

    #[test]
    fn test_avatar_and_house_needs_both() {
        let mut world = World::new();
        let avatar = world.spawn_empty().id();
        let house = world.spawn_empty().id();

        let mut index = SceneIndex {
            avatar: Some(avatar),
            ..default()
        };
        assert_eq!(index.avatar_and_house(), None);

        index.house = Some(house);
        assert_eq!(index.avatar_and_house(), Some((avatar, house)));
    }

    #[test]
    fn test_exact_match_only() {
        let mut world = World::new();
        let house = world.spawn(Name::new("House")).id();
        world.spawn((Name::new("door"), ChildOf(house)));
        world.spawn((Name::new("Door.001"), ChildOf(house)));

        let index = SceneIndex {
            nodes: index_named_nodes(&world, house),
            ..default()
        };
        assert_eq!(index.find("Door"), None);
    }
}

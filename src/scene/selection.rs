use bevy::prelude::*;

/// Selected scene objects, in the order they were picked.
///
/// The first entry is the copy source; all entries are paste targets.
#[derive(Resource, Debug, Default)]
pub struct SceneSelection {
    entities: Vec<Entity>,
}

impl SceneSelection {
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[allow(dead_code)]
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// Plain click: select just this object
    pub fn select_only(&mut self, entity: Entity) {
        self.entities.clear();
        self.entities.push(entity);
    }

    /// Ctrl+click: append the object, or deselect it if already selected
    pub fn toggle(&mut self, entity: Entity) {
        if let Some(pos) = self.entities.iter().position(|e| *e == entity) {
            self.entities.remove(pos);
        } else {
            self.entities.push(entity);
        }
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn retain(&mut self, mut keep: impl FnMut(Entity) -> bool) {
        self.entities.retain(|entity| keep(*entity));
    }
}

use crate::model::{Bounds, EntityId, Point};

use super::store::EntityStore;

/// Tracks the primary selection and applies selection gestures to the
/// `selected` flags held by the entities themselves.
///
/// Point and rectangle picking, as well as select-all, only consider
/// entities that are visible and unlocked. Selecting by id does not filter,
/// so a layer panel can still highlight a locked entity.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    primary: Option<EntityId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self { primary: None }
    }

    /// The most recently picked entity, if it is still selected.
    pub fn primary(&self) -> Option<EntityId> {
        self.primary
    }

    pub fn deselect_all(&mut self, store: &mut EntityStore) {
        for entity in store.iter_mut() {
            entity.selected = false;
        }
        self.primary = None;
    }

    pub fn select_all(&mut self, store: &mut EntityStore) {
        for entity in store.iter_mut() {
            entity.selected = entity.is_editable();
        }
        self.primary = store
            .iter()
            .filter(|e| e.selected)
            .last()
            .map(|e| e.id);
    }

    /// Selects the given ids. With `extend` the current selection is kept.
    pub fn select_ids(&mut self, store: &mut EntityStore, ids: &[EntityId], extend: bool) {
        if !extend {
            self.deselect_all(store);
        }
        for id in ids {
            if let Some(entity) = store.get_mut(*id) {
                entity.selected = true;
                self.primary = Some(*id);
            }
        }
    }

    /// Picks the topmost editable entity whose bounds, grown by `tolerance`,
    /// contain `point`.
    ///
    /// Without `multi` everything else is deselected first. With `multi` the
    /// hit entity's selection is toggled.
    pub fn select_at(
        &mut self,
        store: &mut EntityStore,
        point: Point,
        tolerance: f64,
        multi: bool,
    ) -> Option<EntityId> {
        let hit = store
            .iter()
            .filter(|e| e.is_editable())
            .filter(|e| e.bounds().inflate(tolerance).contains(point))
            .last()
            .map(|e| e.id);

        if !multi {
            self.deselect_all(store);
        }

        let id = hit?;
        let entity = store.get_mut(id)?;
        if multi {
            entity.selected = !entity.selected;
            if entity.selected {
                self.primary = Some(id);
            } else if self.primary == Some(id) {
                self.primary = None;
            }
        } else {
            entity.selected = true;
            self.primary = Some(id);
        }
        Some(id)
    }

    /// Selects every editable entity overlapping the rectangle. A negative
    /// width or height is normalized. Returns how many entities were hit.
    pub fn select_in_rect(
        &mut self,
        store: &mut EntityStore,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        multi: bool,
    ) -> usize {
        if !multi {
            self.deselect_all(store);
        }

        let (rx, rw) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (ry, rh) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        let rect = Bounds::new(rx, ry, rx + rw, ry + rh);

        let hits: Vec<EntityId> = store
            .iter()
            .filter(|e| e.is_editable() && e.bounds().intersects(&rect))
            .map(|e| e.id)
            .collect();

        for id in &hits {
            if let Some(entity) = store.get_mut(*id) {
                entity.selected = true;
            }
        }
        if self.primary.is_none() {
            self.primary = hits.last().copied();
        }
        hits.len()
    }

    /// Selected ids from bottom to top.
    pub fn selected_ids(&self, store: &EntityStore) -> Vec<EntityId> {
        store.iter().filter(|e| e.selected).map(|e| e.id).collect()
    }

    /// Drops the primary id if that entity is gone or deselected.
    pub fn refresh(&mut self, store: &EntityStore) {
        if let Some(id) = self.primary {
            if !store.get(id).map(|e| e.selected).unwrap_or(false) {
                self.primary = None;
            }
        }
    }
}

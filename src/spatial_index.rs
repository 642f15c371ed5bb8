//! Spatial Index Module
//!
//! R-tree based spatial indexing over placed-action rectangles, keyed by
//! instance id. Reduces pointer hit testing from O(n) to O(log n).

use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;
use uuid::Uuid;

/// Bounding box of a single placed action in canvas coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub instance_id: Uuid,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(instance_id: Uuid, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            instance_id,
            min_x: position.0,
            min_y: position.1,
            max_x: position.0 + size.0,
            max_y: position.1 + size.1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.instance_id == other.instance_id
    }
}

/// Spatial index over the placed actions of one board.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<Uuid, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, instance_id: Uuid, position: (f32, f32), size: (f32, f32)) {
        if let Some(old_entry) = self.entries.remove(&instance_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(instance_id, position, size);
        self.tree.insert(entry);
        self.entries.insert(instance_id, entry);
    }

    pub fn remove(&mut self, instance_id: Uuid) -> bool {
        if let Some(entry) = self.entries.remove(&instance_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Reinsert an entry after its rectangle changed.
    pub fn update(&mut self, instance_id: Uuid, position: (f32, f32), size: (f32, f32)) {
        self.insert(instance_id, position, size);
    }

    /// All actions whose rectangle contains the given canvas-space point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<Uuid> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.instance_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

//! Generational slot arenas backing the scene's node and attachment
//! storage. Index 0 is reserved as the nil sentinel; removing an item
//! bumps the slot generation so stale handles stop resolving.

use lona_ids::{AttachmentID, NodeID};

use crate::attachment::Attachment;
use crate::node::SceneNode;

macro_rules! define_arena {
    ($arena:ident, $item:ty, $id:ty, $doc:literal) => {
        #[doc = $doc]
        pub struct $arena {
            slots: Vec<Option<$item>>,
            generations: Vec<u32>,
            free_indices: Vec<usize>,
        }

        impl $arena {
            pub fn new() -> Self {
                // Reserve index 0 as the nil sentinel so the first real ID is 1.
                let mut slots = Vec::with_capacity(2);
                let mut generations = Vec::with_capacity(2);
                slots.push(None);
                generations.push(0);
                Self {
                    slots,
                    generations,
                    free_indices: Vec::new(),
                }
            }

            /// Insert an item, returning an ID carrying index and generation.
            pub fn insert(&mut self, item: $item) -> $id {
                // Reuse a previously freed slot in O(1).
                if let Some(index) = self.free_indices.pop() {
                    self.slots[index] = Some(item);
                    let generation = self.generations[index];
                    return <$id>::from_parts(index as u32, generation);
                }

                // No free slots, push to end
                let index = self.slots.len();
                self.slots.push(Some(item));
                self.generations.push(0);
                <$id>::from_parts(index as u32, 0)
            }

            /// Get an item by ID, `None` if the generation doesn't match.
            pub fn get(&self, id: $id) -> Option<&$item> {
                if id.is_nil()
                    || id.index() == 0
                    || id.index() >= self.slots.len() as u32
                    || self.generations[id.index() as usize] != id.generation()
                {
                    return None;
                }
                self.slots[id.index() as usize].as_ref()
            }

            /// Mutable access with the same generation check.
            pub fn get_mut(&mut self, id: $id) -> Option<&mut $item> {
                if id.is_nil()
                    || id.index() == 0
                    || id.index() >= self.slots.len() as u32
                    || self.generations[id.index() as usize] != id.generation()
                {
                    return None;
                }
                self.slots[id.index() as usize].as_mut()
            }

            /// Remove an item, bumping the slot's generation counter.
            pub fn remove(&mut self, id: $id) -> Option<$item> {
                if id.is_nil()
                    || id.index() == 0
                    || id.index() >= self.slots.len() as u32
                    || self.generations[id.index() as usize] != id.generation()
                {
                    return None;
                }

                let index = id.index() as usize;
                self.generations[index] = self.generations[index].wrapping_add(1);
                let removed = self.slots[index].take();
                if removed.is_some() {
                    self.free_indices.push(index);
                }
                removed
            }

            /// Check whether an ID is still valid.
            pub fn contains(&self, id: $id) -> bool {
                self.get(id).is_some()
            }

            /// Iterator over all live items.
            pub fn iter(&self) -> impl Iterator<Item = ($id, &$item)> {
                self.slots.iter().enumerate().skip(1).filter_map(|(index, slot)| {
                    slot.as_ref()
                        .map(|item| (<$id>::from_parts(index as u32, self.generations[index]), item))
                })
            }

            /// Mutable iterator over all live items.
            pub fn iter_mut(&mut self) -> impl Iterator<Item = ($id, &mut $item)> {
                self.slots
                    .iter_mut()
                    .zip(self.generations.iter())
                    .enumerate()
                    .skip(1)
                    .filter_map(|(index, (slot, &generation))| {
                        slot.as_mut()
                            .map(|item| (<$id>::from_parts(index as u32, generation), item))
                    })
            }

            /// Number of live items.
            pub fn len(&self) -> usize {
                self.slots.iter().filter(|slot| slot.is_some()).count()
            }

            pub fn is_empty(&self) -> bool {
                self.slots.iter().all(|slot| slot.is_none())
            }
        }

        impl Default for $arena {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_arena!(
    NodeArena,
    SceneNode,
    NodeID,
    "Arena of scene nodes. Handles are `NodeID`s (index + generation)."
);
define_arena!(
    AttachmentArena,
    Attachment,
    AttachmentID,
    "Arena of attachments. Handles are `AttachmentID`s (index + generation)."
);

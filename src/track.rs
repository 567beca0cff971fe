use crate::error::{LoopstripError, LoopstripResult};

/// One visual item supplied by the hosting page. Identity is stable for the
/// lifetime of the carousel; the engine never fetches or inspects the image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    pub id: u64,
    pub image_ref: String,
    pub alt_text: String,
}

/// Input contract check: item ids must be unique, since slot-to-item mapping
/// and the host's keyed rendering both lean on stable identity. An empty
/// list is valid (the carousel renders nothing).
pub fn validate_items(items: &[Item]) -> LoopstripResult<()> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(LoopstripError::validation(format!(
                "duplicate item id {}",
                item.id
            )));
        }
    }
    Ok(())
}

/// The materialized 3xN slot sequence: three concatenated copies of the item
/// list, so every position the center can reach has a real element to render.
/// Slot `i` maps to item `i mod N`. Immutable once built; rebuild when the
/// source list changes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    items: Vec<Item>,
    slots: Vec<usize>,
}

impl Track {
    pub fn build(items: &[Item]) -> Track {
        let n = items.len();
        Track {
            items: items.to_vec(),
            slots: (0..n * 3).map(|i| i % n.max(1)).collect(),
        }
    }

    /// N, the number of distinct items.
    pub fn source_len(&self) -> usize {
        self.items.len()
    }

    /// 3N, the number of renderable slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Item index for a slot, or `None` past the end of the track.
    pub fn item_index(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied()
    }

    pub fn item(&self, slot: usize) -> Option<&Item> {
        self.item_index(slot).map(|i| &self.items[i])
    }

    /// `(slot, item_index, item)` in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, usize, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(slot, &idx)| (slot, idx, &self.items[idx]))
    }
}

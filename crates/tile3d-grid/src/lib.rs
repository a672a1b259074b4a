//! Sparse block grid: ordered block sequence plus a position index.
#![forbid(unsafe_code)]

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use tile3d_blocks::Block;
use tile3d_geom::IVec3;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStats {
    pub blocks: usize,
    pub indexed: usize,
}

/// Owns the authoritative block sequence (insertion order drives mesh
/// output order) and a derived `position -> slot` index for O(1) lookup.
///
/// The index must be rebuilt with [`BlockGrid::rebuild_index`] whenever the
/// sequence is changed through [`BlockGrid::blocks_mut`].
#[derive(Default, Debug, Clone)]
pub struct BlockGrid {
    blocks: Vec<Block>,
    index: HashMap<IVec3, usize>,
}

impl BlockGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from a persisted sequence, keeping its order.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let mut grid = Self {
            blocks,
            index: HashMap::new(),
        };
        grid.rebuild_index();
        grid
    }

    /// Returns the block at `pos`, creating it if absent.
    ///
    /// A new block starts with every face hidden, unless `copy_from` names an
    /// existing block whose faces are then copied by value. An existing block
    /// is returned untouched and `copy_from` is ignored.
    pub fn create(&mut self, pos: IVec3, copy_from: Option<IVec3>) -> &mut Block {
        if let Some(&slot) = self.index.get(&pos) {
            return &mut self.blocks[slot];
        }
        let mut block = Block::new(pos);
        if let Some(src) = copy_from.and_then(|p| self.at(p)) {
            block.faces = src.faces;
        }
        let slot = self.blocks.len();
        self.blocks.push(block);
        self.index.insert(pos, slot);
        log::trace!(target: "grid", "create {:?} copy_from={:?} slot={}", pos, copy_from, slot);
        debug_assert!(self.index.len() <= self.blocks.len());
        &mut self.blocks[slot]
    }

    /// Removes the block at `pos`, returning it. Absent positions are a no-op.
    pub fn destroy(&mut self, pos: IVec3) -> Option<Block> {
        let slot = self.index.remove(&pos)?;
        let removed = self.blocks.remove(slot);
        if self.blocks.iter().any(|b| b.position == pos) {
            // Shadowed duplicates go too, so `at(pos)` stays absent.
            self.blocks.retain(|b| b.position != pos);
            self.rebuild_index();
        } else {
            for s in self.index.values_mut() {
                if *s > slot {
                    *s -= 1;
                }
            }
        }
        log::trace!(target: "grid", "destroy {:?} slot={}", pos, slot);
        debug_assert!(self.index.len() <= self.blocks.len());
        Some(removed)
    }

    #[inline]
    pub fn at(&self, pos: IVec3) -> Option<&Block> {
        self.index.get(&pos).map(|&slot| &self.blocks[slot])
    }

    #[inline]
    pub fn at_mut(&mut self, pos: IVec3) -> Option<&mut Block> {
        let slot = *self.index.get(&pos)?;
        Some(&mut self.blocks[slot])
    }

    #[inline]
    pub fn contains(&self, pos: IVec3) -> bool {
        self.index.contains_key(&pos)
    }

    /// Clears and repopulates the index from the sequence.
    ///
    /// If the sequence holds the same position twice, the first occurrence
    /// owns the index entry and later ones are only reachable by iteration.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        self.index.reserve(self.blocks.len());
        let mut duplicates = 0usize;
        for (slot, b) in self.blocks.iter().enumerate() {
            match self.index.entry(b.position) {
                Entry::Occupied(_) => duplicates += 1,
                Entry::Vacant(v) => {
                    v.insert(slot);
                }
            }
        }
        if duplicates > 0 {
            log::warn!(
                target: "grid",
                "rebuild_index: {} duplicate position(s) in block sequence; first occurrence wins",
                duplicates
            );
        }
        log::trace!(target: "grid", "rebuild_index: {} blocks", self.blocks.len());
    }

    /// Index and sequence are in bijection. Duplicate positions make this
    /// false even after `rebuild_index`.
    pub fn is_index_consistent(&self) -> bool {
        self.index.len() == self.blocks.len()
            && self
                .index
                .iter()
                .all(|(pos, &slot)| self.blocks.get(slot).is_some_and(|b| b.position == *pos))
            && self.blocks.iter().all(|b| self.index.contains_key(&b.position))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in insertion order.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Raw access to the sequence for out-of-band restoration. The index is
    /// stale afterwards until [`BlockGrid::rebuild_index`] runs.
    #[inline]
    pub fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }

    /// Swaps in a whole sequence (e.g. a snapshot) and resynchronises the
    /// index. Returns the previous sequence.
    pub fn replace_blocks(&mut self, blocks: Vec<Block>) -> Vec<Block> {
        let old = std::mem::replace(&mut self.blocks, blocks);
        self.rebuild_index();
        old
    }

    pub fn stats(&self) -> GridStats {
        GridStats {
            blocks: self.blocks.len(),
            indexed: self.index.len(),
        }
    }
}

impl<'a> IntoIterator for &'a BlockGrid {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

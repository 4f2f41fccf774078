// Transposition table
//
// A fixed-size, direct-mapped cache from position hash to search results,
// shared by every search thread. One mutex serializes all accesses;
// collisions are lossy by design. One hash may be marked protected so that
// concurrent searches of other positions cannot evict the root entry the
// facade is polling for.

use std::sync::Mutex;

use crate::game_repr::Move;

/// Default slot count, a power of two (~2^20 entries).
pub const TABLE_SLOTS: usize = 1 << 20;

/// How the stored value bounds the true score of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Fully searched window, the value is the score.
    Exact,
    /// All moves failed low; the score is at most the value.
    Upper,
    /// A beta cutoff occurred; the score is at least the value.
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub hash: u64,
    pub best_move: Move,
    pub depth: u8,
    pub value: i32,
    pub bound: Bound,
}

impl TableEntry {
    /// The empty slot: zero depth and a null move.
    pub const NULL: TableEntry = TableEntry {
        hash: 0,
        best_move: Move::NULL,
        depth: 0,
        value: 0,
        bound: Bound::Exact,
    };

    pub fn is_null(&self) -> bool {
        self.depth == 0 && self.best_move.is_null()
    }
}

struct Slots {
    entries: Vec<TableEntry>,
    protected: Option<u64>,
}

pub struct TranspositionTable {
    slots: Mutex<Slots>,
    size: usize,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::with_slots(TABLE_SLOTS)
    }

    pub fn with_slots(size: usize) -> Self {
        Self {
            slots: Mutex::new(Slots {
                entries: vec![TableEntry::NULL; size],
                protected: None,
            }),
            size,
        }
    }

    fn index(&self, hash: u64) -> usize {
        hash as usize % self.size
    }

    /// The stored entry for `hash`, or the null entry when the slot holds a
    /// different position.
    pub fn get(&self, hash: u64) -> TableEntry {
        let slots = self.slots.lock().expect("transposition table mutex poisoned");
        let entry = slots.entries[self.index(hash)];
        if entry.hash == hash {
            entry
        } else {
            TableEntry::NULL
        }
    }

    /// Store `entry` unless the slot holds a deeper search of the same
    /// position, or a different position whose hash is protected.
    pub fn put(&self, entry: TableEntry) {
        let index = self.index(entry.hash);
        let mut slots = self.slots.lock().expect("transposition table mutex poisoned");
        let slot = slots.entries[index];
        // A slot with hash 0 has never stored a position; a reseeded
        // protected slot carries its hash and is not empty in this sense.
        let allowed = slot.hash == 0
            || (slot.hash == entry.hash && slot.depth <= entry.depth)
            || (slot.hash != entry.hash && slots.protected != Some(slot.hash));
        if allowed {
            slots.entries[index] = entry;
        }
    }

    /// Mark `hash` as protected: its slot can only be replaced by entries
    /// carrying the same hash. A slot currently holding a different position
    /// is reseeded with an empty entry for the new hash.
    pub fn set_protected(&self, hash: u64) {
        let index = self.index(hash);
        let mut slots = self.slots.lock().expect("transposition table mutex poisoned");
        slots.protected = Some(hash);
        if slots.entries[index].hash != hash {
            slots.entries[index] = TableEntry {
                hash,
                ..TableEntry::NULL
            };
        }
    }

    pub fn clear(&self) {
        let mut slots = self.slots.lock().expect("transposition table mutex poisoned");
        slots.entries.fill(TableEntry::NULL);
        slots.protected = None;
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

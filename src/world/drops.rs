use crate::data::drop_store::DropStore;
use crate::telemetry::logging;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// One item-drop rule that applies server-wide or within a single continent,
/// independent of which monster was killed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalDropEntry {
    pub item_id: i32,
    pub chance: i32,
    /// Negative means the entry applies to every continent.
    pub continent_id: i8,
    pub min_quantity: i32,
    pub max_quantity: i32,
    /// Zero means the drop is not gated behind a quest.
    #[serde(default)]
    pub quest_id: i16,
}

impl GlobalDropEntry {
    pub fn applies_to_continent(&self, continent_id: i32) -> bool {
        self.continent_id < 0 || i32::from(self.continent_id) == continent_id
    }
}

/// The continent a map belongs to is encoded in the leading digits of its id.
pub fn continent_of(map_id: i32) -> i32 {
    map_id / 100_000_000
}

/// Both tables live behind one lock so a reload swaps them together and a
/// reader never sees a fresh drop list next to stale continent subsets.
#[derive(Default)]
struct DropTables {
    global: Vec<GlobalDropEntry>,
    by_continent: HashMap<i32, Arc<[GlobalDropEntry]>>,
}

/// Global drop list plus the memoized per-continent subsets derived from it.
///
/// Entries live until the next `load`; there is no eviction. The per-continent
/// subset is computed at most once per continent between reloads.
pub struct DropTableCache {
    tables: RwLock<DropTables>,
}

impl DropTableCache {
    pub fn new() -> Self {
        DropTableCache {
            tables: RwLock::new(DropTables::default()),
        }
    }

    /// Replace the global drop list from the store and discard every derived
    /// continent subset. A store failure is logged and leaves the previous
    /// tables untouched, so readers degrade to the last good data
    /// (or to no global drops if the very first load fails).
    pub fn load(&self, store: &dyn DropStore) {
        match store.global_drops() {
            Ok(mut entries) => {
                entries.retain(|entry| entry.chance > 0);
                let mut tables = self.tables.write();
                tables.global = entries;
                tables.by_continent.clear();
            }
            Err(err) => {
                logging::log_error(&format!("global drop load failed: {}", err));
            }
        }
    }

    /// The subset of global drops relevant to the continent `map_id` lies in.
    ///
    /// Every map id of the same continent shares one cached subset. The
    /// returned slice is a shared immutable view; it stays valid across a
    /// reload but will no longer be handed out afterwards.
    pub fn relevant_global_drops(&self, map_id: i32) -> Arc<[GlobalDropEntry]> {
        let continent_id = continent_of(map_id);

        if let Some(subset) = self.tables.read().by_continent.get(&continent_id) {
            return Arc::clone(subset);
        }

        let mut tables = self.tables.write();
        // Another writer may have filled the slot while we waited.
        if let Some(subset) = tables.by_continent.get(&continent_id) {
            return Arc::clone(subset);
        }

        let subset: Arc<[GlobalDropEntry]> = tables
            .global
            .iter()
            .filter(|entry| entry.applies_to_continent(continent_id))
            .cloned()
            .collect();
        tables.by_continent.insert(continent_id, Arc::clone(&subset));
        subset
    }

    pub fn global_drop_count(&self) -> usize {
        self.tables.read().global.len()
    }
}

impl Default for DropTableCache {
    fn default() -> Self {
        Self::new()
    }
}

use crate::data::string_archive::StringArchive;
use crate::telemetry::logging;
use crate::world::monster::MonsterFactory;
use dashmap::DashMap;

/// Lazily-populated boss flags and display names, resolved on first miss and
/// kept for the life of the process; the data they derive from is static.
pub struct MobMetadataCache {
    boss: DashMap<i32, bool>,
    names: DashMap<i32, String>,
}

impl MobMetadataCache {
    pub fn new() -> Self {
        MobMetadataCache {
            boss: DashMap::new(),
            names: DashMap::new(),
        }
    }

    /// Whether the mob is a boss. A mob the factory cannot resolve counts as
    /// non-boss and that answer is memoized like any other, so the factory is
    /// asked at most once per id.
    pub fn is_boss(&self, mob_id: i32, factory: &dyn MonsterFactory) -> bool {
        if let Some(flag) = self.boss.get(&mob_id) {
            return *flag;
        }
        // The entry call holds the shard lock, so concurrent misses on the
        // same id resolve once.
        *self.boss.entry(mob_id).or_insert_with(|| {
            match factory.monster(mob_id) {
                Some(monster) => monster.is_boss(),
                None => {
                    logging::log_error(&format!("boss check for non-existent mob id {}", mob_id));
                    false
                }
            }
        })
    }

    /// Display name for a mob id, empty string when the archive has none.
    /// The empty substitute is cached too.
    pub fn mob_name(&self, mob_id: i32, archive: &dyn StringArchive) -> String {
        if let Some(name) = self.names.get(&mob_id) {
            return name.clone();
        }
        self.names
            .entry(mob_id)
            .or_insert_with(|| archive.mob_name(mob_id).unwrap_or_default())
            .clone()
    }
}

impl Default for MobMetadataCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring search over the whole mob name table.
///
/// Deliberately uncached: this is an occasional administrative lookup, and a
/// full archive scan per call is fine.
pub fn mob_ids_from_name(archive: &dyn StringArchive, search: &str) -> Vec<(i32, String)> {
    let needle = search.to_lowercase();
    let mut matches = Vec::new();
    for (mob_id, name) in archive.mob_names() {
        let name = name.unwrap_or_else(|| "NO-NAME".to_string());
        if name.to_lowercase().contains(&needle) {
            matches.push((mob_id, name));
        }
    }
    matches
}

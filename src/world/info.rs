use crate::data::drop_store::DropStore;
use crate::data::string_archive::StringArchive;
use crate::telemetry::logging;
use crate::world::attack_info::{AttackInfoCache, MobAttackInfo};
use crate::world::drops::{DropTableCache, GlobalDropEntry};
use crate::world::metadata::{self, MobMetadataCache};
use crate::world::mob_skill::MobSkillId;
use crate::world::monster::MonsterFactory;
use crate::world::timing::TimingCache;
use std::sync::Arc;

/// Read-mostly monster information shared by the request-handling threads:
/// global drop tables, attack timing/cost data and boss/name metadata.
///
/// One provider is built at server startup and handed around as
/// `Arc<MonsterInfoProvider>`. The drop tables reload on `clear_drops`; the
/// other tables live untouched until shutdown.
pub struct MonsterInfoProvider {
    drop_store: Arc<dyn DropStore>,
    string_archive: Arc<dyn StringArchive>,
    monster_factory: Arc<dyn MonsterFactory>,
    drops: DropTableCache,
    timing: TimingCache,
    attack_info: AttackInfoCache,
    metadata: MobMetadataCache,
}

impl MonsterInfoProvider {
    /// Build the provider and run the initial global drop load. A failing
    /// load is logged and leaves the drop table empty; it does not fail
    /// construction.
    pub fn new(
        drop_store: Arc<dyn DropStore>,
        string_archive: Arc<dyn StringArchive>,
        monster_factory: Arc<dyn MonsterFactory>,
    ) -> Self {
        let provider = MonsterInfoProvider {
            drop_store,
            string_archive,
            monster_factory,
            drops: DropTableCache::new(),
            timing: TimingCache::new(),
            attack_info: AttackInfoCache::new(),
            metadata: MobMetadataCache::new(),
        };
        provider.drops.load(provider.drop_store.as_ref());
        provider
    }

    /// Global drops relevant to the continent of `map_id`, as a shared
    /// read-only view.
    pub fn relevant_global_drops(&self, map_id: i32) -> Arc<[GlobalDropEntry]> {
        self.drops.relevant_global_drops(map_id)
    }

    /// Drop the global drop list and every derived continent subset, then
    /// reload from the store. Concurrent readers observe either the old or
    /// the new tables, never a mix.
    pub fn clear_drops(&self) {
        self.drops.load(self.drop_store.as_ref());
        logging::log_game(&format!(
            "global drop table reloaded, {} entries",
            self.drops.global_drop_count()
        ));
    }

    pub fn global_drop_count(&self) -> usize {
        self.drops.global_drop_count()
    }

    pub fn set_mob_attack_animation_time(&self, monster_id: i32, attack_pos: i32, millis: i32) {
        self.timing
            .set_mob_attack_animation_time(monster_id, attack_pos, millis);
    }

    pub fn mob_attack_animation_time(&self, monster_id: i32, attack_pos: i32) -> i32 {
        self.timing.mob_attack_animation_time(monster_id, attack_pos)
    }

    pub fn set_mob_skill_animation_time(&self, skill: MobSkillId, millis: i32) {
        self.timing.set_mob_skill_animation_time(skill, millis);
    }

    pub fn mob_skill_animation_time(&self, skill: MobSkillId) -> i32 {
        self.timing.mob_skill_animation_time(skill)
    }

    pub fn set_mob_attack_info(&self, monster_id: i32, attack_pos: i32, mp_cost: i32, cooldown: i32) {
        self.attack_info
            .set_mob_attack_info(monster_id, attack_pos, mp_cost, cooldown);
    }

    pub fn mob_attack_info(&self, monster_id: i32, attack_pos: i32) -> Option<MobAttackInfo> {
        self.attack_info.mob_attack_info(monster_id, attack_pos)
    }

    pub fn is_boss(&self, mob_id: i32) -> bool {
        self.metadata.is_boss(mob_id, self.monster_factory.as_ref())
    }

    pub fn mob_name_from_id(&self, mob_id: i32) -> String {
        self.metadata.mob_name(mob_id, self.string_archive.as_ref())
    }

    /// Uncached administrative search over the archive's mob name table.
    pub fn mob_ids_from_name(&self, search: &str) -> Vec<(i32, String)> {
        metadata::mob_ids_from_name(self.string_archive.as_ref(), search)
    }
}

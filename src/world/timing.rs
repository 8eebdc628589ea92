use crate::world::mob_skill::MobSkillId;
use dashmap::DashMap;

/// Animation durations for monster attacks and skills, filled in once while
/// mob data is ingested.
///
/// A key that was never set reads as 0; a zero duration and "never set" are
/// indistinguishable here on purpose, and `attack_pos` is not range-checked.
/// Writes simply overwrite.
pub struct TimingCache {
    mob_attack: DashMap<(i32, i32), i32>,
    mob_skill: DashMap<MobSkillId, i32>,
}

impl TimingCache {
    pub fn new() -> Self {
        TimingCache {
            mob_attack: DashMap::new(),
            mob_skill: DashMap::new(),
        }
    }

    pub fn set_mob_attack_animation_time(&self, monster_id: i32, attack_pos: i32, millis: i32) {
        self.mob_attack.insert((monster_id, attack_pos), millis);
    }

    pub fn mob_attack_animation_time(&self, monster_id: i32, attack_pos: i32) -> i32 {
        self.mob_attack
            .get(&(monster_id, attack_pos))
            .map(|time| *time)
            .unwrap_or(0)
    }

    pub fn set_mob_skill_animation_time(&self, skill: MobSkillId, millis: i32) {
        self.mob_skill.insert(skill, millis);
    }

    pub fn mob_skill_animation_time(&self, skill: MobSkillId) -> i32 {
        self.mob_skill.get(&skill).map(|time| *time).unwrap_or(0)
    }
}

impl Default for TimingCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_attack_time_reads_zero() {
        let cache = TimingCache::new();
        assert_eq!(cache.mob_attack_animation_time(100100, 0), 0);
        // Out-of-range slots are not rejected here, unlike attack info.
        assert_eq!(cache.mob_attack_animation_time(100100, 99), 0);
    }

    #[test]
    fn last_attack_time_write_wins() {
        let cache = TimingCache::new();
        cache.set_mob_attack_animation_time(100100, 1, 810);
        cache.set_mob_attack_animation_time(100100, 1, 1200);
        assert_eq!(cache.mob_attack_animation_time(100100, 1), 1200);
        // Other slots stay independent.
        assert_eq!(cache.mob_attack_animation_time(100100, 2), 0);
    }

    #[test]
    fn skill_times_keyed_structurally() {
        let cache = TimingCache::new();
        cache.set_mob_skill_animation_time(MobSkillId::new(140, 3), 660);
        assert_eq!(cache.mob_skill_animation_time(MobSkillId::new(140, 3)), 660);
        assert_eq!(cache.mob_skill_animation_time(MobSkillId::new(140, 4)), 0);
    }
}

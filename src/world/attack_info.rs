use dashmap::DashMap;

/// Cost and cooldown of one monster attack slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobAttackInfo {
    pub mp_cost: i32,
    pub cooldown: i32,
}

/// Attack mana cost and cooldown, keyed by `monster_id * 8 + attack_pos`.
///
/// Monsters carry at most eight attack slots, so the slot index packs into
/// the low three bits of the key. Unlike the timing cache, the getter rejects
/// slots outside `[0, 7]` and reports misses as `None`.
pub struct AttackInfoCache {
    info: DashMap<i32, MobAttackInfo>,
}

impl AttackInfoCache {
    pub fn new() -> Self {
        AttackInfoCache {
            info: DashMap::new(),
        }
    }

    pub fn set_mob_attack_info(&self, monster_id: i32, attack_pos: i32, mp_cost: i32, cooldown: i32) {
        self.info
            .insert(packed_key(monster_id, attack_pos), MobAttackInfo { mp_cost, cooldown });
    }

    pub fn mob_attack_info(&self, monster_id: i32, attack_pos: i32) -> Option<MobAttackInfo> {
        if !(0..=7).contains(&attack_pos) {
            return None;
        }
        self.info
            .get(&packed_key(monster_id, attack_pos))
            .map(|info| *info)
    }
}

impl Default for AttackInfoCache {
    fn default() -> Self {
        Self::new()
    }
}

fn packed_key(monster_id: i32, attack_pos: i32) -> i32 {
    monster_id * 8 + attack_pos
}

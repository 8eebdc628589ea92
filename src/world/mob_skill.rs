/// Identity of one monster skill: the skill number plus its level.
///
/// Equality and hashing are structural, so two independently constructed
/// values for the same skill/level pair address the same cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MobSkillId {
    pub skill: i32,
    pub level: i32,
}

impl MobSkillId {
    pub fn new(skill: i32, level: i32) -> Self {
        MobSkillId { skill, level }
    }
}

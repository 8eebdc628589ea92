pub mod attack_info;
pub mod drops;
pub mod info;
pub mod metadata;
pub mod mob_skill;
pub mod monster;
pub mod timing;

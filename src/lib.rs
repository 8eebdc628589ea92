pub mod data;
pub mod telemetry;
pub mod world;

pub use data::drop_store::{DropStore, StoreError, YamlDropStore};
pub use data::string_archive::{ArchiveError, StringArchive, YamlStringArchive};
pub use world::attack_info::MobAttackInfo;
pub use world::drops::GlobalDropEntry;
pub use world::info::MonsterInfoProvider;
pub use world::mob_skill::MobSkillId;
pub use world::monster::{Monster, MonsterCatalog, MonsterFactory};

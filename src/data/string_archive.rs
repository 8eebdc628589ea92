use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The string-data archive seam: the hierarchical game-data source that holds
/// display names, addressed by mob id.
pub trait StringArchive: Send + Sync {
    /// Direct lookup of the `<id>/name` node. `None` when the mob has no
    /// entry or no name node; callers decide what to substitute.
    fn mob_name(&self, mob_id: i32) -> Option<String>;

    /// Scan of the entire mob name table, in table order. The name is `None`
    /// where the node exists but carries no name.
    fn mob_names(&self) -> Vec<(i32, Option<String>)>;
}

#[derive(Debug, Deserialize)]
struct MobStrings {
    name: Option<String>,
}

/// Mob string table loaded once from a YAML file and served from memory;
/// the underlying archive data never changes while the server runs.
pub struct YamlStringArchive {
    mobs: BTreeMap<i32, MobStrings>,
}

impl YamlStringArchive {
    pub fn from_path(path: &Path) -> Result<Self, ArchiveError> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| ArchiveError::Read(path.to_path_buf(), err.to_string()))?;
        let mobs: BTreeMap<i32, MobStrings> = serde_yaml::from_str(&content)
            .map_err(|err| ArchiveError::Parse(path.to_path_buf(), err.to_string()))?;
        Ok(YamlStringArchive { mobs })
    }

    pub fn len(&self) -> usize {
        self.mobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mobs.is_empty()
    }
}

impl StringArchive for YamlStringArchive {
    fn mob_name(&self, mob_id: i32) -> Option<String> {
        self.mobs.get(&mob_id).and_then(|mob| mob.name.clone())
    }

    fn mob_names(&self) -> Vec<(i32, Option<String>)> {
        self.mobs
            .iter()
            .map(|(id, mob)| (*id, mob.name.clone()))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum ArchiveError {
    Read(PathBuf, String),
    Parse(PathBuf, String),
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchiveError::Read(path, msg) => {
                write!(f, "failed to read {}: {}", path.display(), msg)
            }
            ArchiveError::Parse(path, msg) => {
                write!(f, "failed to parse {}: {}", path.display(), msg)
            }
        }
    }
}

impl std::error::Error for ArchiveError {}

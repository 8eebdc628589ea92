use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A monster definition as resolved from authoritative mob data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub boss: bool,
}

impl Monster {
    pub fn is_boss(&self) -> bool {
        self.boss
    }
}

/// Resolves a monster definition by id, or reports that no such mob exists.
pub trait MonsterFactory: Send + Sync {
    fn monster(&self, mob_id: i32) -> Option<Monster>;
}

/// Monster definitions loaded once from a YAML file, keyed by mob id.
#[derive(Debug)]
pub struct MonsterCatalog {
    monsters: HashMap<i32, Monster>,
}

impl MonsterCatalog {
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| CatalogError::Read(path.to_path_buf(), err.to_string()))?;
        let entries: Vec<Monster> = serde_yaml::from_str(&content)
            .map_err(|err| CatalogError::Parse(path.to_path_buf(), err.to_string()))?;
        let mut monsters = HashMap::with_capacity(entries.len());
        for monster in entries {
            monsters.insert(monster.id, monster);
        }
        Ok(MonsterCatalog { monsters })
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}

impl MonsterFactory for MonsterCatalog {
    fn monster(&self, mob_id: i32) -> Option<Monster> {
        self.monsters.get(&mob_id).cloned()
    }
}

#[derive(Debug, Clone)]
pub enum CatalogError {
    Read(PathBuf, String),
    Parse(PathBuf, String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Read(path, msg) => {
                write!(f, "failed to read {}: {}", path.display(), msg)
            }
            CatalogError::Parse(path, msg) => {
                write!(f, "failed to parse {}: {}", path.display(), msg)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_catalog(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("maple-catalog-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn catalog_loads_and_resolves() {
        let path = temp_catalog(
            "monsters.yaml",
            r#"
- id: 100100
  name: Snail
  level: 1
- id: 8800000
  name: Zakum1
  level: 110
  boss: true
"#,
        );
        let catalog = MonsterCatalog::from_path(&path).unwrap();
        assert_eq!(catalog.len(), 2);

        let snail = catalog.monster(100100).unwrap();
        assert_eq!(snail.name, "Snail");
        assert!(!snail.is_boss());

        let zakum = catalog.monster(8800000).unwrap();
        assert!(zakum.is_boss());

        assert!(catalog.monster(123).is_none());
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = MonsterCatalog::from_path(Path::new("/nonexistent/monsters.yaml")).unwrap_err();
        assert!(matches!(err, CatalogError::Read(_, _)));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let path = temp_catalog("broken.yaml", "- id: [not, a, mob");
        let err = MonsterCatalog::from_path(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_, _)));
    }
}

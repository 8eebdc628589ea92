use crate::world::drops::GlobalDropEntry;
use std::path::PathBuf;

/// The relational-store seam for the global drop table.
///
/// Implementations return every candidate row with a positive chance, in the
/// shape of `SELECT * FROM drop_data_global WHERE chance > 0`.
pub trait DropStore: Send + Sync {
    fn global_drops(&self) -> Result<Vec<GlobalDropEntry>, StoreError>;
}

/// Drop rows kept in a YAML file. The file is opened and released per call,
/// mirroring the scoped-connection convention of the database-backed store.
pub struct YamlDropStore {
    path: PathBuf,
}

impl YamlDropStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        YamlDropStore { path: path.into() }
    }
}

impl DropStore for YamlDropStore {
    fn global_drops(&self) -> Result<Vec<GlobalDropEntry>, StoreError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|err| StoreError::Unavailable(format!("{}: {}", self.path.display(), err)))?;
        let mut rows: Vec<GlobalDropEntry> = serde_yaml::from_str(&content)
            .map_err(|err| StoreError::Malformed(format!("{}: {}", self.path.display(), err)))?;
        rows.retain(|row| row.chance > 0);
        Ok(rows)
    }
}

#[derive(Debug, Clone)]
pub enum StoreError {
    /// The backing store could not be reached or read.
    Unavailable(String),
    /// The store answered with rows that did not parse.
    Malformed(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "drop store unavailable: {}", msg),
            StoreError::Malformed(msg) => write!(f, "drop store returned bad rows: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_store(name: &str, content: &str) -> YamlDropStore {
        let dir = std::env::temp_dir().join(format!("maple-dropstore-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        YamlDropStore::new(path)
    }

    #[test]
    fn reads_rows_and_applies_chance_filter() {
        let store = temp_store(
            "global_drops.yaml",
            r#"
- item_id: 4000313
  chance: 400
  continent_id: -1
  min_quantity: 1
  max_quantity: 1
- item_id: 4031172
  chance: 0
  continent_id: 2
  min_quantity: 1
  max_quantity: 3
  quest_id: 4921
"#,
        );
        let rows = store.global_drops().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item_id, 4000313);
        assert_eq!(rows[0].quest_id, 0);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let store = YamlDropStore::new("/nonexistent/global_drops.yaml");
        assert!(matches!(
            store.global_drops().unwrap_err(),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn malformed_rows_are_reported() {
        let store = temp_store("broken.yaml", "- item_id: [oops");
        assert!(matches!(
            store.global_drops().unwrap_err(),
            StoreError::Malformed(_)
        ));
    }
}

use crate::core::persistence;
use crate::core::{Pet, PetStore};
use crate::utils::error::{PetError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Keeps one pet as a JSON document in a single local file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PetStore for JsonFileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn save(&self, pet: &Pet) -> Result<()> {
        let content = persistence::to_json(pet)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, content)?;
        tracing::info!(path = %self.location(), pet = %pet.name(), "pet saved");
        Ok(())
    }

    fn load(&self) -> Result<Pet> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PetError::load(self.location(), "no saved pet found"),
            _ => PetError::load(self.location(), e),
        })?;

        let pet = persistence::from_json(&self.location(), &content)?;
        tracing::info!(path = %self.location(), pet = %pet.name(), "pet loaded");
        Ok(pet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("nested/dir/pet.json"));

        let mut pet = Pet::new("Rex").unwrap();
        pet.train("sit").unwrap();
        pet.feed();

        store.save(&pet).unwrap();
        assert_eq!(store.load().unwrap(), pet);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("missing.json"));
        let err = store.load().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Load);
    }

    #[test]
    fn test_corrupt_file_is_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pet.json");
        fs::write(&path, "{\"name\": \"Rex\", \"hunger\":").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Load);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();

        let store = JsonFileStore::new(blocker.join("pet.json"));
        let err = store.save(&Pet::new("Rex").unwrap()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}

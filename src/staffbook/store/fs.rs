use super::DataStore;
use crate::book::Model;
use crate::error::{Result, StaffError};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "data.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StaffError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Model> {
        let data_file = self.data_file();
        if !data_file.exists() {
            log::debug!("no data file at {}, starting empty", data_file.display());
            return Ok(Model::default());
        }
        let content = fs::read_to_string(&data_file).map_err(StaffError::Io)?;
        let model: Model = serde_json::from_str(&content).map_err(|e| {
            StaffError::Store(format!("corrupt data file {}: {}", data_file.display(), e))
        })?;
        Ok(model)
    }

    fn save(&mut self, model: &Model) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(model).map_err(StaffError::Serialization)?;
        fs::write(self.data_file(), content).map_err(StaffError::Io)?;
        log::debug!(
            "saved {} employees (version {})",
            model.book.employees().len(),
            model.book.version()
        );
        Ok(())
    }
}

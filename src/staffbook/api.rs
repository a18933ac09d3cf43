//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for UI clients (the one-shot CLI and the interactive shell both go
//! through it).
//!
//! ## Role and Responsibilities
//!
//! - **Parses** command text into a [`Command`]
//! - **Dispatches** it to [`commands::execute`] with the external collaborators
//! - **Persists** the model when the command changed it
//!
//! It keeps the loaded [`Model`] for its own lifetime, so a shell session reads the
//! store once and writes back after every mutating command.
//!
//! ## Persistence Rule
//!
//! The book's version stamp and the active filter are compared before and after
//! execution; the store is written only when either differs. Failed commands never
//! mutate the model, so they never trigger a write. If the write itself fails, the
//! model is put back the way it was before the command.
//!
//! ## Generic Over DataStore
//!
//! `StaffApi<S: DataStore>` is generic over the storage backend:
//! - Production: `StaffApi<FileStore>`
//! - Testing: `StaffApi<InMemoryStore>`

use crate::book::Model;
use crate::commands::{self, config::ConfigAction, CmdResult, Command, ExecContext};
use crate::config::StaffConfig;
use crate::error::Result;
use crate::model::Employee;
use crate::parser::parse_command;
use crate::picture::{FileTransfer, FsTransfer, PictureChooser};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct StaffApi<S: DataStore> {
    store: S,
    model: Model,
    home: PathBuf,
    picture_dir: PathBuf,
    transfer: Box<dyn FileTransfer>,
}

impl<S: DataStore> StaffApi<S> {
    /// Loads the model from `store` and the configuration from `home`.
    pub fn new(store: S, home: PathBuf) -> Result<Self> {
        let model = store.load()?;
        let config = StaffConfig::load(&home)?;
        let picture_dir = config.picture_dir(&home);
        log::debug!(
            "loaded {} employees from {}",
            model.book.employees().len(),
            home.display()
        );
        Ok(Self {
            store,
            model,
            home,
            picture_dir,
            transfer: Box::new(FsTransfer),
        })
    }

    pub fn with_transfer(mut self, transfer: impl FileTransfer + 'static) -> Self {
        self.transfer = Box::new(transfer);
        self
    }

    pub fn execute_line(
        &mut self,
        line: &str,
        chooser: &mut dyn PictureChooser,
    ) -> Result<CmdResult> {
        let command = parse_command(line)?;
        self.execute(command, chooser)
    }

    pub fn execute(
        &mut self,
        command: Command,
        chooser: &mut dyn PictureChooser,
    ) -> Result<CmdResult> {
        let snapshot = self.model.clone();

        let mut ctx = ExecContext {
            picture_dir: &self.picture_dir,
            chooser,
            transfer: self.transfer.as_ref(),
        };
        let result = commands::execute(command, &mut self.model, &mut ctx)?;

        let changed = self.model.book.version() != snapshot.book.version()
            || self.model.filter() != snapshot.filter();
        if changed {
            if let Err(e) = self.store.save(&self.model) {
                log::debug!("save failed, restoring previous model: {}", e);
                self.model = snapshot;
                return Err(e);
            }
        }
        Ok(result)
    }

    /// The currently displayed employees.
    pub fn displayed(&self) -> Vec<&Employee> {
        self.model.filtered_employees()
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.home, action)
    }

    pub fn picture_dir(&self) -> &Path {
        &self.picture_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CommandError, ParseError, StaffError};
    use crate::picture::{CancelledChooser, FixedChooser};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with_staff(home: &Path) -> StaffApi<InMemoryStore> {
        let fixture = StoreFixture::new().with_staff();
        StaffApi::new(fixture.store, home.to_path_buf()).unwrap()
    }

    #[test]
    fn mutating_command_saves() {
        let temp = tempfile::tempdir().unwrap();
        let mut api = api_with_staff(temp.path());
        api.execute_line("add n/Roy Balakrishnan p/2000", &mut CancelledChooser)
            .unwrap();
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().load().unwrap().book.employees().len(), 4);
    }

    #[test]
    fn filter_change_saves_but_repeat_does_not() {
        let temp = tempfile::tempdir().unwrap();
        let mut api = api_with_staff(temp.path());
        api.execute_line("filter payroll >= 3000", &mut CancelledChooser)
            .unwrap();
        api.execute_line("filter payroll >= 3000", &mut CancelledChooser)
            .unwrap();
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.displayed().len(), 2);
    }

    #[test]
    fn parse_failure_does_not_save() {
        let temp = tempfile::tempdir().unwrap();
        let mut api = api_with_staff(temp.path());
        let err = api
            .execute_line("filter payroll >=", &mut CancelledChooser)
            .unwrap_err();
        assert!(matches!(
            err,
            StaffError::Parse(ParseError::InvalidFormat { .. })
        ));
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn cancelled_picture_does_not_save() {
        let temp = tempfile::tempdir().unwrap();
        let mut api = api_with_staff(temp.path());
        let err = api
            .execute_line("setpicture 1", &mut CancelledChooser)
            .unwrap_err();
        assert!(matches!(
            err,
            StaffError::Command(CommandError::UserCancelled)
        ));
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn read_only_command_does_not_save() {
        let temp = tempfile::tempdir().unwrap();
        let mut api = api_with_staff(temp.path());
        let result = api.execute_line("list", &mut CancelledChooser).unwrap();
        assert_eq!(result.listed_employees.len(), 3);
        assert_eq!(api.store().save_count(), 0);
    }

    /// Loads fine, refuses every write.
    struct ReadOnlyStore(InMemoryStore);

    impl DataStore for ReadOnlyStore {
        fn load(&self) -> Result<Model> {
            self.0.load()
        }

        fn save(&mut self, _model: &Model) -> Result<()> {
            Err(StaffError::Store("disk full".into()))
        }
    }

    #[test]
    fn failed_save_restores_model() {
        let temp = tempfile::tempdir().unwrap();
        let fixture = StoreFixture::new().with_staff();
        let mut api = StaffApi::new(ReadOnlyStore(fixture.store), temp.path().to_path_buf())
            .unwrap();

        let err = api
            .execute_line("add n/Roy Balakrishnan p/2000", &mut CancelledChooser)
            .unwrap_err();
        assert!(matches!(err, StaffError::Store(_)));
        assert_eq!(api.displayed().len(), 3);

        api.execute_line("filter payroll > 4000", &mut CancelledChooser)
            .unwrap_err();
        assert_eq!(api.displayed().len(), 3);
    }

    struct RefusingTransfer;

    impl FileTransfer for RefusingTransfer {
        fn copy(&self, _source: &Path, _dest: &Path) -> std::io::Result<()> {
            Err(std::io::ErrorKind::PermissionDenied.into())
        }

        fn rename(&self, _from: &Path, _to: &Path) -> std::io::Result<()> {
            Err(std::io::ErrorKind::PermissionDenied.into())
        }
    }

    #[test]
    fn injected_transfer_failure_does_not_save() {
        let temp = tempfile::tempdir().unwrap();
        let source = temp.path().join("alex.png");
        std::fs::write(&source, b"png").unwrap();
        let mut api = api_with_staff(temp.path()).with_transfer(RefusingTransfer);

        let err = api
            .execute_line("setpicture 1", &mut FixedChooser(source))
            .unwrap_err();
        assert!(matches!(err, StaffError::Command(CommandError::IoFailure)));
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn picture_dir_follows_config() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = StaffConfig::default();
        config.set("picture-dir", "faces").unwrap();
        config.save(temp.path()).unwrap();

        let api = api_with_staff(temp.path());
        assert_eq!(api.picture_dir(), temp.path().join("faces"));
    }
}

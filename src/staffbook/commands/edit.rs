use crate::book::Model;
use crate::commands::{CmdMessage, CmdResult, EmployeeChanges, ExecContext};
use crate::error::{CommandError, Result};
use crate::model::EmployeeId;
use crate::picture::destination_for;

use super::helpers::{displayed_employee, replace_employee};

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit: Edits the employee identified by EMPLOYEE_ID in the displayed list. \
    At least one field must be given.\n\
    Parameters: EMPLOYEE_ID [n/NAME] [p/PAYROLL] [l/LEAVES]\n\
    Example: edit 1 p/4000 l/3";

/// A rename moves the employee's managed picture along with it, before the record changes.
pub fn run(
    model: &mut Model,
    id: EmployeeId,
    changes: EmployeeChanges,
    ctx: &mut ExecContext<'_>,
) -> Result<CmdResult> {
    let mut employee = displayed_employee(model, id)?;

    if let Some(name) = &changes.name {
        let taken = model
            .book
            .employees()
            .iter()
            .any(|e| e.id != id && e.is_same_employee(name));
        if taken {
            return Err(CommandError::DuplicateEmployee(name.clone()).into());
        }
    }

    if let Some(name) = changes.name {
        if let Some(current) = employee.picture.take() {
            let dest = destination_for(ctx.picture_dir, &name)?;
            if current != dest {
                ctx.transfer.rename(&current, &dest).map_err(|e| {
                    log::debug!(
                        "moving {} to {} failed: {}",
                        current.display(),
                        dest.display(),
                        e
                    );
                    CommandError::IoFailure
                })?;
            }
            employee.picture = Some(dest);
        }
        employee.name = name;
    }
    if let Some(payroll) = changes.payroll {
        employee.payroll = payroll;
    }
    if let Some(leave_count) = changes.leave_count {
        employee.leave_count = leave_count;
    }
    employee.touch();

    replace_employee(model, employee.clone());
    log::info!("edited employee #{}", id);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Edited Employee: {}", employee)))
        .with_affected_employee(employee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StaffError;
    use crate::picture::{CancelledChooser, FileTransfer, FsTransfer};
    use crate::store::memory::fixtures::StoreFixture;
    use std::fs;
    use std::io;
    use std::path::Path;

    fn id(n: u32) -> EmployeeId {
        EmployeeId::new(n).unwrap()
    }

    fn rename_to(name: &str) -> EmployeeChanges {
        EmployeeChanges {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    fn edit_in(
        picture_dir: &Path,
        transfer: &dyn FileTransfer,
        model: &mut Model,
        id: EmployeeId,
        changes: EmployeeChanges,
    ) -> Result<CmdResult> {
        let mut chooser = CancelledChooser;
        let mut ctx = ExecContext {
            picture_dir,
            chooser: &mut chooser,
            transfer,
        };
        run(model, id, changes, &mut ctx)
    }

    fn edit(model: &mut Model, id: EmployeeId, changes: EmployeeChanges) -> Result<CmdResult> {
        let temp = tempfile::tempdir().unwrap();
        edit_in(temp.path(), &FsTransfer, model, id, changes)
    }

    struct StuckTransfer;

    impl FileTransfer for StuckTransfer {
        fn copy(&self, _source: &Path, _dest: &Path) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn rename(&self, _from: &Path, _to: &Path) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    /// Alex Yeoh (#1) with a managed picture holding `bytes`.
    fn alex_with_picture(picture_dir: &Path, bytes: &[u8]) -> Model {
        fs::create_dir_all(picture_dir).unwrap();
        let managed = picture_dir.join("Alex Yeoh.png");
        fs::write(&managed, bytes).unwrap();

        let mut model = StoreFixture::new().with_staff().model();
        model.book.mutate(|list| list[0].picture = Some(managed));
        model
    }

    #[test]
    fn updates_only_given_fields() {
        let mut model = StoreFixture::new().with_staff().model();
        let changes = EmployeeChanges {
            payroll: Some(9000),
            ..Default::default()
        };
        edit(&mut model, id(2), changes).unwrap();

        let bernice = model.book.get(id(2)).unwrap();
        assert_eq!(bernice.payroll, 9000);
        assert_eq!(bernice.leave_count, 4);
        assert_eq!(bernice.name, "Bernice Yu");
    }

    #[test]
    fn rename_moves_managed_picture() {
        let temp = tempfile::tempdir().unwrap();
        let picture_dir = temp.path().join("images");
        let mut model = alex_with_picture(&picture_dir, b"AAA");

        edit_in(&picture_dir, &FsTransfer, &mut model, id(1), rename_to("Alexander Yeoh")).unwrap();

        let moved = picture_dir.join("Alexander Yeoh.png");
        let alex = model.book.get(id(1)).unwrap();
        assert_eq!(alex.name, "Alexander Yeoh");
        assert_eq!(alex.picture, Some(moved.clone()));
        assert_eq!(fs::read(moved).unwrap(), b"AAA");
        assert!(!picture_dir.join("Alex Yeoh.png").exists());
    }

    #[test]
    fn failed_move_leaves_record_unchanged() {
        let temp = tempfile::tempdir().unwrap();
        let picture_dir = temp.path().join("images");
        let mut model = alex_with_picture(&picture_dir, b"AAA");
        let before = model.clone();

        let changes = EmployeeChanges {
            name: Some("Alexander".into()),
            payroll: Some(1),
            ..Default::default()
        };
        let err = edit_in(&picture_dir, &StuckTransfer, &mut model, id(1), changes).unwrap_err();

        assert!(matches!(err, StaffError::Command(CommandError::IoFailure)));
        assert_eq!(model, before);
    }

    #[test]
    fn rename_without_picture_touches_no_files() {
        let mut model = StoreFixture::new().with_staff().model();
        let temp = tempfile::tempdir().unwrap();
        edit_in(temp.path(), &StuckTransfer, &mut model, id(2), rename_to("Bernice Tan")).unwrap();
        assert_eq!(model.book.get(id(2)).unwrap().picture, None);
    }

    #[test]
    fn rename_onto_other_employee_fails() {
        let mut model = StoreFixture::new().with_staff().model();
        let before = model.clone();

        let err = edit(&mut model, id(1), rename_to("Bernice Yu")).unwrap_err();
        assert!(matches!(
            err,
            StaffError::Command(CommandError::DuplicateEmployee(_))
        ));
        assert_eq!(model, before);
    }

    #[test]
    fn renaming_to_own_name_is_allowed() {
        let mut model = StoreFixture::new().with_staff().model();
        edit(&mut model, id(1), rename_to("ALEX YEOH")).unwrap();
        assert_eq!(model.book.get(id(1)).unwrap().name, "ALEX YEOH");
    }

    #[test]
    fn unknown_id_fails() {
        let mut model = StoreFixture::new().with_staff().model();
        let err = edit(&mut model, id(42), EmployeeChanges::default()).unwrap_err();
        assert!(matches!(
            err,
            StaffError::Command(CommandError::InvalidIndexOrId(_))
        ));
    }
}

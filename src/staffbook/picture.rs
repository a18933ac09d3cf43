//! # Picture Transfer
//!
//! Picking a source file and copying bytes are external concerns. The core only
//! talks to them through [`PictureChooser`] and [`FileTransfer`], and it decides
//! where the copy lands: `<managed dir>/<employee name>.png`.

use crate::error::{CommandError, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;

/// Fixed extension of every stored picture.
pub const PICTURE_EXTENSION: &str = ".png";

/// Source extensions accepted by `setpicture`, compared case-insensitively.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Asks the user for a source picture.
///
/// Implementations return `CommandError::UserCancelled` when the user backs out.
pub trait PictureChooser {
    fn choose_source(&mut self) -> Result<PathBuf>;
}

/// Moves bytes in and around the managed picture directory.
pub trait FileTransfer {
    /// Copies `source` over `dest`. Copying a file onto itself leaves it untouched.
    fn copy(&self, source: &Path, dest: &Path) -> io::Result<()>;

    /// Moves `from` to `to`, replacing whatever is at `to`.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Filesystem transfer. Copies are staged in a temporary file next to the
/// destination and renamed into place, so a failed copy never truncates it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTransfer;

impl FileTransfer for FsTransfer {
    fn copy(&self, source: &Path, dest: &Path) -> io::Result<()> {
        let dir = ensure_parent(dest)?;
        if is_same_file(source, dest)? {
            log::debug!("{} is already in place", dest.display());
            return Ok(());
        }

        let mut input = File::open(source)?;
        let mut staged = NamedTempFile::new_in(dir)?;
        io::copy(&mut input, staged.as_file_mut())?;
        staged.persist(dest).map_err(|e| e.error)?;
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        ensure_parent(to)?;
        if is_same_file(from, to)? {
            return Ok(());
        }
        fs::rename(from, to)
    }
}

fn ensure_parent(path: &Path) -> io::Result<&Path> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    Ok(dir)
}

fn is_same_file(a: &Path, b: &Path) -> io::Result<bool> {
    if !b.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}

/// A chooser that always answers with the same path. Useful for scripted runs.
#[derive(Debug, Clone)]
pub struct FixedChooser(pub PathBuf);

impl PictureChooser for FixedChooser {
    fn choose_source(&mut self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// A chooser that behaves like a dialog closed without a selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct CancelledChooser;

impl PictureChooser for CancelledChooser {
    fn choose_source(&mut self) -> Result<PathBuf> {
        Err(CommandError::UserCancelled.into())
    }
}

/// `<picture_dir>/<name>.png`, refused unless the file name is a single plain component.
pub fn destination_for(picture_dir: &Path, employee_name: &str) -> Result<PathBuf> {
    let file_name = format!("{}{}", employee_name, PICTURE_EXTENSION);
    let mut components = Path::new(&file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(picture_dir.join(&file_name)),
        _ => Err(CommandError::UnsafePictureName(employee_name.to_string()).into()),
    }
}

pub fn is_accepted_picture(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|a| a.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

use staffbook::error::{CommandError, Result, StaffError};
use staffbook::picture::{PictureChooser, ACCEPTED_EXTENSIONS};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Asks for a picture path on the given input. An empty answer or end of input cancels.
///
/// Borrows the reader so the shell can keep reading commands from the same stdin lock.
pub struct PromptChooser<'a, R: BufRead> {
    input: &'a mut R,
}

impl<'a, R: BufRead> PromptChooser<'a, R> {
    pub fn new(input: &'a mut R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> PictureChooser for PromptChooser<'_, R> {
    fn choose_source(&mut self) -> Result<PathBuf> {
        loop {
            eprint!(
                "Choose input file ({} images, empty to cancel): ",
                ACCEPTED_EXTENSIONS.join("/").to_uppercase()
            );
            io::stderr().flush().map_err(StaffError::Io)?;

            let mut line = String::new();
            if self.input.read_line(&mut line).map_err(StaffError::Io)? == 0 {
                return Err(CommandError::UserCancelled.into());
            }

            let answer = line.trim().trim_matches(|c| c == '"' || c == '\'');
            if answer.is_empty() {
                return Err(CommandError::UserCancelled.into());
            }

            let path = PathBuf::from(answer);
            if path.is_file() {
                return Ok(path);
            }
            eprintln!("No such file: {}", path.display());
        }
    }
}

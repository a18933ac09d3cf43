//! # CLI Behavior
//!
//! This is **one possible UI client** for staffbook, not the application itself.
//!
//! ## One-shot and Shell Modes
//!
//! Any word clap does not recognise as one of its own subcommands is treated as
//! command text: `staffbook filter payroll ">=" 3000` runs exactly the line
//! `filter payroll >= 3000` and exits. Running `staffbook` with no arguments, or
//! `staffbook shell`, starts an interactive session that reads one command per
//! line until `exit` or end of input.
//!
//! ## Picture Selection
//!
//! `setpicture` asks for a source file on stdin. `--picture <FILE>` answers the
//! question up front, which is what scripts and tests use.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, dispatch and the shell loop
//! - `chooser`: Stdin-backed picture chooser
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod chooser;
mod commands;
mod render;
pub mod setup;

pub use commands::run;
pub use render::print_error;

//! # CLI Dispatch
//!
//! - `run()`: parses arguments, sets up logging and the API, dispatches
//! - `init_context()`: resolves the home directory and opens the file store
//! - `handle_*()`: one handler per top-level mode
//!
//! Command errors are fatal in one-shot mode (exit code 1) and printed-then-skipped
//! in the shell.

use super::chooser::PromptChooser;
use super::render::{print_error, print_result};
use super::setup::{Cli, Commands};
use clap::Parser;
use env_logger::Env;
use staffbook::api::StaffApi;
use staffbook::commands::config::ConfigAction;
use staffbook::config::resolve_home;
use staffbook::error::Result;
use staffbook::picture::FixedChooser;
use staffbook::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "> ";

struct AppContext {
    api: StaffApi<FileStore>,
    picture: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Line(words)) => handle_line(&mut ctx, &words.join(" ")),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Shell) | None => handle_shell(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = resolve_home(cli.home.clone())?;
    log::debug!("using home {}", home.display());
    let api = StaffApi::new(FileStore::new(home.clone()), home)?;
    Ok(AppContext {
        api,
        picture: cli.picture.clone(),
    })
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_line(ctx, line, &mut input)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = ctx.api.config(action)?;
    print_result(&result);
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    shell_loop(ctx, &mut input)
}

/// Reads one command per line until `exit` or end of input.
fn shell_loop<R: BufRead>(ctx: &mut AppContext, input: &mut R) -> Result<()> {
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match execute(ctx, line, input) {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(e) => print_error(&e),
        }
    }
}

fn run_line<R: BufRead>(ctx: &mut AppContext, line: &str, input: &mut R) -> Result<()> {
    execute(ctx, line, input).map(|_| ())
}

/// Runs one line and prints its result. Returns whether the session should end.
fn execute<R: BufRead>(ctx: &mut AppContext, line: &str, input: &mut R) -> Result<bool> {
    let result = match &ctx.picture {
        Some(path) => {
            let mut chooser = FixedChooser(path.clone());
            ctx.api.execute_line(line, &mut chooser)?
        }
        None => {
            let mut chooser = PromptChooser::new(input);
            ctx.api.execute_line(line, &mut chooser)?
        }
    };
    print_result(&result);
    Ok(result.exit)
}

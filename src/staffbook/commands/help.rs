use crate::commands::{add, delete, edit, filter, find, set_picture, CmdMessage, CmdResult};

pub const COMMAND_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const USAGE: &str = "Commands: add, edit, delete, list, find, filter, setpicture, clear, help, exit";

pub fn run() -> CmdResult {
    let mut result = CmdResult::default().with_message(CmdMessage::info(USAGE));
    for usage in [
        add::USAGE,
        edit::USAGE,
        delete::USAGE,
        find::USAGE,
        filter::USAGE,
        set_picture::USAGE,
    ] {
        result.add_message(CmdMessage::info(usage));
    }
    result
}

pub fn exit() -> CmdResult {
    CmdResult::default()
        .with_message(CmdMessage::info("Exiting address book as requested ..."))
        .with_exit()
}

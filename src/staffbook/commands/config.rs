use crate::commands::{CmdMessage, CmdResult};
use crate::config::{StaffConfig, KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(home: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StaffConfig::load(home)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in KEYS {
                let value = config.get(key, home).unwrap_or_default();
                result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            }
        }
        ConfigAction::ShowKey(key) => match config.get(&key, home) {
            Some(value) => result.add_message(CmdMessage::info(value)),
            None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(home)?;
            let display_val = config.get(&key, home).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
        }
    }

    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult, ReadplanPaths};
use crate::config::ReadplanConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or edits the session config. `Set` persists to the data directory and
/// updates `config` in place so the change applies immediately.
pub fn run(
    paths: &ReadplanPaths,
    config: &mut ReadplanConfig,
    action: ConfigAction,
) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut updated = config.clone();
            if let Err(e) = updated.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            updated.save(&paths.data_dir)?;
            *config = updated;

            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config.clone());
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            if key == "plan-dir" {
                result.add_message(CmdMessage::info("The new plan is used from the next run"));
            }
            Ok(result)
        }
    }
}

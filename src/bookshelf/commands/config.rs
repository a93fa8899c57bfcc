use crate::commands::{BookshelfPaths, CmdMessage, CmdResult};
use crate::config::BookshelfConfig;
use crate::error::{BookshelfError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &BookshelfPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = BookshelfConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = BookshelfConfig::load(dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| BookshelfError::Config(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = BookshelfConfig::load(dir)?;
            config.set(&key, &value).map_err(BookshelfError::Config)?;
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

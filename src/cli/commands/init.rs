use std::{fs, path::Path};

use anyhow::{Ok, Result};

use super::{
    helper::finish,
    {CommandResult, CommandSummary, InitSummary},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    let error = if config_path.exists() {
        Some(format!("{} already exists", CONFIG_FILE_NAME))
    } else {
        fs::write(config_path, default_config_json()? + "\n")?;
        None
    };

    Ok(finish(
        CommandSummary::Init(InitSummary { error }),
        Vec::new(),
        0,
        true,
    ))
}

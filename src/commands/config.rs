use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use sharedcal_core::config::SharedCalConfig;

use crate::ConfigCommand;

pub fn output(config_path: &Path, command: ConfigCommand) -> Result<String> {
    let mut config = SharedCalConfig::load_from(config_path)?;

    match command {
        ConfigCommand::Show => Ok(format!(
            "{}\n  Config:        {}\n  Data:          {}\n  Default user:  {}",
            "Paths".bold(),
            config_path.display(),
            config.data_dir.display(),
            config.default_user.as_deref().unwrap_or("(none)")
        )),
        ConfigCommand::Init => {
            if config_path.exists() {
                return Ok(format!("Config already exists at {}", config_path.display()));
            }
            config.save_to(config_path)?;
            Ok(format!("{} {}", "Created".green(), config_path.display()))
        }
        ConfigCommand::DefaultUser { name } => {
            let name = name.trim();
            config.default_user = (!name.is_empty()).then(|| name.to_string());
            config.save_to(config_path)?;
            Ok(match &config.default_user {
                Some(name) => format!("Default user set to {}", name),
                None => "Default user cleared".to_string(),
            })
        }
    }
}

pub fn run(command: ConfigCommand) -> Result<()> {
    let config_path = SharedCalConfig::config_path()?;
    println!("{}", output(&config_path, command)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_defaults_once() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sharedcal/config.toml");

        let out = output(&path, ConfigCommand::Init).unwrap();
        assert!(out.contains("Created"));
        assert_eq!(SharedCalConfig::load_from(&path).unwrap(), SharedCalConfig::default());

        let out = output(&path, ConfigCommand::Init).unwrap();
        assert!(out.contains("already exists"));
    }

    #[test]
    fn test_default_user_is_saved_and_cleared() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        output(&path, ConfigCommand::DefaultUser { name: " alice ".into() }).unwrap();
        let config = SharedCalConfig::load_from(&path).unwrap();
        assert_eq!(config.default_user.as_deref(), Some("alice"));
        assert!(output(&path, ConfigCommand::Show).unwrap().contains("alice"));

        let out = output(&path, ConfigCommand::DefaultUser { name: "".into() }).unwrap();
        assert_eq!(out, "Default user cleared");
        assert_eq!(SharedCalConfig::load_from(&path).unwrap().default_user, None);
    }
}

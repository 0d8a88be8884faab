use anyhow::{Context, Result};
use derivative::Derivative;
use log::debug;
use once_cell::sync::Lazy;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::Mutex};

const APP_NAME: &str = "chromakey";

static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::default()));

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub defaults: Defaults,
}

/// Fallback values used when the matching command line flag is absent.
#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Defaults {
    #[derivative(Default(value = "\"#00ff00\".to_string()"))]
    pub key_color: String,

    #[derivative(Default(value = "100"))]
    pub threshold: u32,
}

impl Config {
    fn init(&mut self) -> Result<()> {
        let app_dirs =
            AppDirs::new(Some(APP_NAME), true).with_context(|| "no platform config directory")?;

        fs::create_dir_all(&app_dirs.config_dir)?;
        self.config_path = app_dirs.config_dir.join(format!("{APP_NAME}.toml"));

        self.load().with_context(|| "load config file failed")?;
        debug!("{:?}", self);
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        match fs::read_to_string(&self.config_path) {
            Ok(text) => match toml::from_str::<Config>(&text) {
                Ok(mut c) => {
                    c.config_path = self.config_path.clone();
                    *self = c;
                    Ok(())
                }
                Err(_) => {
                    if let Some(bak_file) = self.config_path.as_os_str().to_str() {
                        _ = fs::copy(&self.config_path, format!("{bak_file}.bak"));
                    }

                    match toml::to_string_pretty(self) {
                        Ok(text) => Ok(fs::write(&self.config_path, text)?),
                        Err(e) => Err(e.into()),
                    }
                }
            },
            Err(_) => match toml::to_string_pretty(self) {
                Ok(text) => Ok(fs::write(&self.config_path, text)?),
                Err(e) => Err(e.into()),
            },
        }
    }
}

/// Initializes the global configuration. Call once at startup.
pub fn init() -> Result<()> {
    CONFIG.lock().unwrap().init()
}

/// Returns a clone of the configured fallback values.
pub fn defaults() -> Defaults {
    CONFIG.lock().unwrap().defaults.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let c: Config = toml::from_str("").unwrap();
        assert_eq!(c.defaults.key_color, "#00ff00");
        assert_eq!(c.defaults.threshold, 100);
    }

    #[test]
    fn test_partial_config_fills_missing_fields() {
        let c: Config = toml::from_str("[defaults]\nthreshold = 42\n").unwrap();
        assert_eq!(c.defaults.threshold, 42);
        assert_eq!(c.defaults.key_color, "#00ff00");
    }

    #[test]
    fn test_full_config_overrides_defaults() {
        let text = "[defaults]\nkey_color = \"#0000ff\"\nthreshold = 15\n";
        let c: Config = toml::from_str(text).unwrap();
        assert_eq!(c.defaults.key_color, "#0000ff");
        assert_eq!(c.defaults.threshold, 15);
    }
}

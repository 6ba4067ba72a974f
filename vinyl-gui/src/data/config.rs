use std::{fs, fs::File, path::PathBuf};

use druid::{Data, Lens, Size};
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};

use crate::data::Nav;

const APP_NAME: &str = "Vinyl";
const CONFIG_FILENAME: &str = "config.json";

#[derive(Clone, Debug, Data, Lens, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub window_size: Size,
    pub last_route: Option<Nav>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            window_size: Size::new(400.0, 640.0),
            last_route: None,
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Option<Config> {
        let path = Self::config_path()?;
        if let Ok(file) = File::open(&path) {
            log::info!("loading config: {:?}", &path);
            Some(serde_json::from_reader(file).expect("Failed to read config"))
        } else {
            None
        }
    }

    pub fn save(&self) {
        let result = Self::config_dir()
            .zip(Self::config_path())
            .ok_or_else(|| "missing config dir".to_string())
            .and_then(|(dir, path)| {
                fs::create_dir_all(dir).map_err(|err| err.to_string())?;
                let file = File::create(path).map_err(|err| err.to_string())?;
                serde_json::to_writer_pretty(file, self).map_err(|err| err.to_string())
            });
        if let Err(err) = result {
            log::error!("failed to save config: {}", err);
        }
    }
}

#[derive(Clone, Copy, Debug, Data, Eq, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

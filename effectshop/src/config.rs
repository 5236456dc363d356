use anyhow::{Context, Result, bail};
use image_effect::{Intensity, PhotoEffect};
use log::debug;
use once_cell::sync::Lazy;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

const CARGO_TOML: &str = include_str!("../Cargo.toml");
static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::default()));

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(skip)]
    pub is_first_run: bool,

    #[serde(skip)]
    pub app_name: String,

    #[serde(default)]
    pub preference: Preference,

    #[serde(default)]
    pub effect: EffectSetting,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Preference {
    #[derivative(Default(value = "400"))]
    pub win_width: u32,

    #[derivative(Default(value = "300"))]
    pub win_height: u32,

    pub always_on_top: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct EffectSetting {
    #[derivative(Default(value = "50"))]
    pub default_intensity: i32,

    #[derivative(Default(value = "\"Emboss\".to_string()"))]
    pub default_effect: String,

    #[derivative(Default(value = "\"processed_image.jpg\".to_string()"))]
    pub save_filename: String,

    // empty: directory of the running executable
    pub work_dir: String,
}

impl EffectSetting {
    pub fn intensity(&self) -> Intensity {
        Intensity::new(self.default_intensity)
    }

    /// Unknown names fall back to the first effect of the selector.
    pub fn effect(&self) -> PhotoEffect {
        PhotoEffect::from_name(&self.default_effect).unwrap_or_default()
    }

    pub fn work_dir(&self) -> Option<PathBuf> {
        if !self.work_dir.is_empty() {
            return Some(PathBuf::from(&self.work_dir));
        }

        match cutil::fs::working_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                log::warn!("{e:?}");
                None
            }
        }
    }
}

impl Config {
    /// Reads the package name and loads `<config_dir>/<app_name>.toml`.
    pub fn init(&mut self) -> Result<()> {
        self.app_name = app_name()?;

        let app_dirs = AppDirs::new(Some(&self.app_name), true)
            .with_context(|| "resolve application directories failed")?;

        self.init_in(&app_dirs.config_dir)?;
        if self.is_first_run {
            log::info!("wrote default config to {}", self.config_path.display());
        }
        debug!("{:?}", self);
        Ok(())
    }

    fn init_in(&mut self, config_dir: &Path) -> Result<()> {
        fs::create_dir_all(config_dir)?;
        self.config_path = config_dir.join(format!("{}.toml", self.app_name));
        self.load().with_context(|| "load config file failed")
    }

    /// Loads the config file. A missing or unreadable file is replaced by
    /// the defaults; an unparsable one is kept next to it as `.bak`.
    fn load(&mut self) -> Result<()> {
        let text = match fs::read_to_string(&self.config_path) {
            Ok(text) => text,
            Err(_) => return self.write_defaults(),
        };

        match toml::from_str::<Config>(&text) {
            Ok(mut c) => {
                c.config_path = self.config_path.clone();
                c.is_first_run = self.is_first_run;
                c.app_name = self.app_name.clone();
                *self = c;

                Ok(())
            }
            Err(e) => {
                log::warn!("parse {} failed: {e}", self.config_path.display());

                let mut bak_file = self.config_path.clone().into_os_string();
                bak_file.push(".bak");
                _ = fs::copy(&self.config_path, bak_file);

                self.write_defaults()
            }
        }
    }

    fn write_defaults(&mut self) -> Result<()> {
        self.is_first_run = true;
        self.preference = Preference::default();
        self.effect = EffectSetting::default();
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        match toml::to_string_pretty(self) {
            Ok(text) => Ok(fs::write(&self.config_path, text)
                .with_context(|| "save config failed".to_string())?),
            Err(e) => bail!(format!("convert config to toml format failed. {e:?}")),
        }
    }
}

fn app_name() -> Result<String> {
    let metadata = toml::from_str::<toml::Table>(CARGO_TOML)?;

    metadata
        .get("package")
        .and_then(|package| package.get("name"))
        .and_then(|name| name.as_str())
        .map(|name| name.to_string())
        .with_context(|| "package name is missing in Cargo.toml")
}

/// Loads the global configuration. Falls back to the defaults on failure.
pub fn init() {
    let mut config = match CONFIG.lock() {
        Ok(config) => config,
        Err(poisoned) => poisoned.into_inner(),
    };

    if let Err(e) = config.init() {
        log::warn!("{e:?}");
    }
}

pub fn all() -> Config {
    match CONFIG.lock() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

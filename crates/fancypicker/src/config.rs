use arcseek::{ItemLabel, Style, StyleError};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ItemConfig {
    pub label: Option<ItemLabel>,
    #[serde(default)]
    pub progress: f64,
}

/// Optional `#rrggbb` overrides for the theme colors.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct ColorConfig {
    pub orbit: Option<String>,
    pub item: Option<String>,
    pub progress: Option<String>,
    pub pointer_halo: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub colors: ColorConfig,
    #[serde(default = "default_items")]
    pub items: Vec<ItemConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::default(),
            colors: ColorConfig::default(),
            items: default_items(),
        }
    }
}

impl Config {
    pub fn labels(&self) -> Vec<ItemLabel> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.label
                    .clone()
                    .unwrap_or_else(|| ItemLabel::new((i + 1).to_string()))
            })
            .collect()
    }
}

fn default_items() -> Vec<ItemConfig> {
    ["1", "2", "3"]
        .into_iter()
        .map(|label| ItemConfig {
            label: Some(ItemLabel::new(label)),
            progress: 0.0,
        })
        .collect()
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid style: {0}")]
    Style(#[from] StyleError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "fancypicker", "fancypicker")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("FANCYPICKER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = s.try_deserialize()?;
    config.style.validate()?;
    Ok(config)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default config: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;
use std::path::Path;

fn is_config_change(event: &notify::Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

/// Watches the config directory; reload requests arrive on `tx` from notify's own thread.
/// The returned watcher must be kept alive for as long as reloads are wanted.
pub fn watch_config(tx: Sender<AppEvent>) -> Result<RecommendedWatcher, ConfigError> {
    let config_path = get_config_path()?;
    let config_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
    }

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<notify::Event>| match res {
            Ok(event) if is_config_change(&event, &config_path) => {
                if tx.send_blocking(AppEvent::ConfigReload).is_err() {
                    log::debug!("Config reload dropped, GUI is gone");
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("Watch error: {}", e),
        },
        notify::Config::default(),
    )?;
    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcseek::ActivationPolicy;

    #[test]
    fn test_default_config_file_parses() {
        let parsed: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(parsed.style, Style::default());
        assert_eq!(parsed.items.len(), 3);
        assert_eq!(parsed.labels()[0], ItemLabel::new("1"));
    }

    #[test]
    fn test_config_deserialization() {
        let json = r##"{
            "style": { "end_angle": 90.0, "activation": "Host" },
            "colors": { "orbit": "#101010" },
            "items": [ { "label": "Warmth", "progress": 12.5 }, {} ]
        }"##;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.style.end_angle, 90.0);
        assert_eq!(config.style.activation, ActivationPolicy::Host);
        assert_eq!(config.colors.orbit.as_deref(), Some("#101010"));
        assert_eq!(config.items[0].progress, 12.5);
        assert_eq!(
            config.labels(),
            vec![ItemLabel::new("Warmth"), ItemLabel::new("2")]
        );
    }

    #[test]
    fn test_only_changes_to_config_file_reload() {
        use notify::event::{AccessKind, CreateKind, ModifyKind};

        let path = Path::new("/home/user/.config/fancypicker/config.toml");
        let modified = notify::Event::new(EventKind::Modify(ModifyKind::Any)).add_path(path.into());
        let created = notify::Event::new(EventKind::Create(CreateKind::File)).add_path(path.into());
        let accessed = notify::Event::new(EventKind::Access(AccessKind::Any)).add_path(path.into());
        let other = notify::Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path("/home/user/.config/fancypicker/notes.txt".into());

        assert!(is_config_change(&modified, path));
        assert!(is_config_change(&created, path));
        assert!(!is_config_change(&accessed, path));
        assert!(!is_config_change(&other, path));
    }

    #[test]
    fn test_missing_items_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }
}

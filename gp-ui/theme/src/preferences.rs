use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::ColorMode;

/// Default key the color mode preference is stored under.
pub const DEFAULT_COLOR_MODE_KEY: &str = "darkMode";

/// Where and under which key preferences are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesConfig {
    pub path: PathBuf,
    pub color_mode_key: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: preferences_path(),
            color_mode_key: String::from(DEFAULT_COLOR_MODE_KEY),
        }
    }
}

impl PreferencesConfig {
    pub fn with_color_mode_key(mut self, key: impl Into<String>) -> Self {
        self.color_mode_key = key.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

/// Flat key/value preference document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    values: BTreeMap<String, serde_json::Value>,
}

impl Preferences {
    /// Read a color mode stored under `key`.
    ///
    /// Booleans and the strings `"true"`/`"false"` are accepted.
    pub fn color_mode(&self, key: &str) -> Option<ColorMode> {
        let is_dark = match self.values.get(key)? {
            serde_json::Value::Bool(value) => *value,
            serde_json::Value::String(value) => match value.as_str() {
                "true" => true,
                "false" => false,
                _ => return None,
            },
            _ => return None,
        };

        Some(if is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        })
    }

    pub fn set_color_mode(&mut self, key: &str, mode: ColorMode) {
        self.values
            .insert(key.to_string(), serde_json::Value::Bool(mode.is_dark()));
    }
}

/// Status describing how preferences were loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferencesLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading preferences from disk.
#[derive(Debug, Clone)]
pub struct PreferencesLoad {
    preferences: Preferences,
    status: PreferencesLoadStatus,
}

impl PreferencesLoad {
    pub fn status(&self) -> &PreferencesLoadStatus {
        &self.status
    }

    /// Consume the value and return both payload and status.
    pub fn into_parts(self) -> (Preferences, PreferencesLoadStatus) {
        (self.preferences, self.status)
    }
}

pub fn load_preferences(path: &Path) -> Result<PreferencesLoad, ThemeError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(PreferencesLoad {
                preferences: Preferences::default(),
                status: PreferencesLoadStatus::Missing,
            });
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<Preferences>(&data) {
        Ok(preferences) => Ok(PreferencesLoad {
            preferences,
            status: PreferencesLoadStatus::Loaded,
        }),
        Err(err) => Ok(PreferencesLoad {
            preferences: Preferences::default(),
            status: PreferencesLoadStatus::Invalid(format!("{err}")),
        }),
    }
}

pub fn save_preferences(
    path: &Path,
    preferences: &Preferences,
) -> Result<(), ThemeError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(preferences)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

/// Persisted light/dark preference.
///
/// Falls back to [`ColorMode::Light`] when nothing usable is stored.
#[derive(Debug, Clone)]
pub struct ColorModePreference {
    config: PreferencesConfig,
    preferences: Preferences,
    mode: ColorMode,
}

impl ColorModePreference {
    /// Load the stored preference, degrading to defaults on any failure.
    pub fn load(config: PreferencesConfig) -> Self {
        let preferences = match load_preferences(&config.path) {
            Ok(load) => {
                let (preferences, status) = load.into_parts();
                if let PreferencesLoadStatus::Invalid(message) = status {
                    log::warn!("preferences file invalid: {message}");
                }
                preferences
            },
            Err(err) => {
                log::warn!("preferences read failed: {err}");
                Preferences::default()
            },
        };

        let mode = preferences
            .color_mode(&config.color_mode_key)
            .unwrap_or_default();

        Self {
            config,
            preferences,
            mode,
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn key(&self) -> &str {
        &self.config.color_mode_key
    }

    /// Flip the mode and persist it. The in-memory mode changes even when
    /// the write fails.
    pub fn toggle(&mut self) -> Result<ColorMode, ThemeError> {
        self.set(self.mode.toggled())
    }

    pub fn set(&mut self, mode: ColorMode) -> Result<ColorMode, ThemeError> {
        self.mode = mode;
        self.preferences
            .set_color_mode(&self.config.color_mode_key, mode);
        save_preferences(&self.config.path, &self.preferences)?;
        log::debug!(
            "color mode persisted under `{}`: {mode:?}",
            self.config.color_mode_key
        );
        Ok(mode)
    }
}

fn preferences_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("gp-ui")
            .join("preferences.json");
    }

    std::env::temp_dir().join("gp-ui").join("preferences.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    #[test]
    fn given_missing_file_when_loading_then_light_mode_is_used() {
        let root = test_temp_dir("missing");
        let config = PreferencesConfig::default()
            .with_path(root.join("preferences.json"));

        let preference = ColorModePreference::load(config);

        assert_eq!(preference.mode(), ColorMode::Light);
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_toggle_when_reloaded_then_mode_is_restored_under_custom_key() {
        let root = test_temp_dir("toggle");
        let config = PreferencesConfig::default()
            .with_path(root.join("preferences.json"))
            .with_color_mode_key("appTheme");

        let mut preference = ColorModePreference::load(config.clone());
        let mode = preference.toggle().expect("toggle should persist");
        assert_eq!(mode, ColorMode::Dark);

        let reloaded = ColorModePreference::load(config);
        assert_eq!(reloaded.mode(), ColorMode::Dark);
        assert_eq!(reloaded.key(), "appTheme");

        let contents = fs::read_to_string(root.join("preferences.json"))
            .expect("preferences should be written");
        assert!(contents.contains("\"appTheme\": true"));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_loading_then_defaults_with_invalid_status() {
        let root = test_temp_dir("invalid");
        let path = root.join("preferences.json");
        fs::write(&path, "{ not json").expect("payload should be written");

        let load = load_preferences(&path).expect("load should not fail");
        assert!(matches!(load.status(), PreferencesLoadStatus::Invalid(_)));
        let (preferences, _) = load.into_parts();
        assert_eq!(preferences, Preferences::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn string_values_are_accepted_for_color_mode() {
        let preferences: Preferences =
            serde_json::from_str(r#"{"darkMode":"true","other":"false"}"#)
                .expect("valid preferences json");

        assert_eq!(preferences.color_mode("darkMode"), Some(ColorMode::Dark));
        assert_eq!(preferences.color_mode("other"), Some(ColorMode::Light));
        assert_eq!(preferences.color_mode("absent"), None);
    }

    fn test_temp_dir(test_name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "gp-ui-preferences-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{
    DEFAULT_CONFIG_PATH, DEFAULT_OPENFEEDBACK_PROJECT, DEFAULT_OUTPUT_DIR, DEFAULT_SESSIONS_PATH,
    DEFAULT_SLOTS_PATH, DEFAULT_SPEAKERS_PATH, DEFAULT_YOUTUBE_PLAYLIST, ENV_LOCALE, ENV_OUTPUT_DIR,
};
use crate::domain::ConferenceDates;
use crate::error::{Result, SiteError};
use crate::i18n::Locale;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub data: DataPaths,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub locale: Locale,
    pub feedback_project: String,
    pub youtube_playlist: String,
    pub dates: ConferenceDates,
    /// Optional TOML file overriding the built-in translation strings
    pub translations: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            feedback_project: DEFAULT_OPENFEEDBACK_PROJECT.to_string(),
            youtube_playlist: DEFAULT_YOUTUBE_PLAYLIST.to_string(),
            dates: ConferenceDates::default(),
            translations: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub sessions: PathBuf,
    pub slots: PathBuf,
    pub speakers: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            sessions: PathBuf::from(DEFAULT_SESSIONS_PATH),
            slots: PathBuf::from(DEFAULT_SLOTS_PATH),
            speakers: PathBuf::from(DEFAULT_SPEAKERS_PATH),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load_from<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            info!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path).map_err(|e| {
            SiteError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Applies `CONF_SITE_*` environment variables on top of the file values.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(locale) = env::var(ENV_LOCALE) {
            self.site.locale = locale.parse()?;
        }
        if let Ok(dir) = env::var(ENV_OUTPUT_DIR) {
            self.output.dir = PathBuf::from(dir);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from("does/not/exist.toml").unwrap();
        assert_eq!(config.site.locale, Locale::En);
        assert_eq!(config.site.feedback_project, "p32EOIbP5bj4WDdz8bJs");
        assert_eq!(config.data.slots, PathBuf::from("data/slots.json"));
        assert_eq!(config.output.dir, PathBuf::from("public"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[site]
locale = "fr"

[site.dates]
day_one = "2023-10-18"

[output]
dir = "dist"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.site.locale, Locale::Fr);
        assert_eq!(config.site.dates.day_one.to_string(), "2023-10-18");
        assert_eq!(config.site.dates.day_two.to_string(), "2022-10-20");
        assert_eq!(config.site.youtube_playlist, "PLuZ_sYdawLiUHU4E1i5RrFsRN_lQcgPwT");
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert_eq!(config.data.sessions, PathBuf::from("data/sessions.json"));
    }

    #[test]
    fn test_env_overrides() {
        // Only this test touches these variables
        env::set_var(ENV_LOCALE, "fr");
        env::set_var(ENV_OUTPUT_DIR, "/tmp/conf-site-out");
        let config = Config::default().with_env_overrides();
        env::set_var(ENV_LOCALE, "klingon");
        let invalid = Config::default().with_env_overrides();
        env::remove_var(ENV_LOCALE);
        env::remove_var(ENV_OUTPUT_DIR);

        let config = config.unwrap();
        assert_eq!(config.site.locale, Locale::Fr);
        assert_eq!(config.output.dir, PathBuf::from("/tmp/conf-site-out"));
        assert!(matches!(invalid, Err(SiteError::UnknownLocale(ref code)) if code == "klingon"));

        let untouched = Config::default().with_env_overrides().unwrap();
        assert_eq!(untouched.site.locale, Locale::En);
        assert_eq!(untouched.output.dir, PathBuf::from("public"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[site\nlocale = ").unwrap();
        assert!(matches!(Config::load_from(file.path()), Err(SiteError::Toml(_))));
    }
}

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SiteError};
use crate::schedule::DayLabels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(SiteError::UnknownLocale(other.to_string())),
        }
    }
}

/// Strings a session page needs from the site's translation catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    pub locale: Locale,
    pub cancelled: String,
    pub day1: String,
    pub day2: String,
}

/// Partial catalog read from a TOML file; absent keys keep the built-in text.
#[derive(Debug, Default, Deserialize)]
struct TranslationOverrides {
    cancelled: Option<String>,
    day1: Option<String>,
    day2: Option<String>,
}

impl Translations {
    pub fn for_locale(locale: Locale) -> Self {
        let (cancelled, day1, day2) = match locale {
            Locale::En => ("Cancelled", "Wednesday", "Thursday"),
            Locale::Fr => ("Annulé", "Mercredi", "Jeudi"),
        };
        Self {
            locale,
            cancelled: cancelled.to_string(),
            day1: day1.to_string(),
            day2: day2.to_string(),
        }
    }

    pub fn with_overrides(mut self, content: &str) -> Result<Self> {
        let overrides: TranslationOverrides = toml::from_str(content)?;
        if let Some(cancelled) = overrides.cancelled {
            self.cancelled = cancelled;
        }
        if let Some(day1) = overrides.day1 {
            self.day1 = day1;
        }
        if let Some(day2) = overrides.day2 {
            self.day2 = day2;
        }
        Ok(self)
    }

    pub fn load<P: AsRef<Path>>(locale: Locale, overrides: Option<P>) -> Result<Self> {
        let translations = Self::for_locale(locale);
        match overrides {
            Some(path) => {
                debug!("Loading translation overrides from {}", path.as_ref().display());
                let content = fs::read_to_string(path.as_ref())?;
                translations.with_overrides(&content)
            }
            None => Ok(translations),
        }
    }

    pub fn day_labels(&self) -> DayLabels {
        DayLabels {
            day_one: self.day1.clone(),
            day_two: self.day2.clone(),
        }
    }
}

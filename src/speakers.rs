use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{PartialSpeaker, Speaker};
use crate::error::{Result, SiteError};

/// Outcome of a speaker lookup that callers can branch on instead of
/// propagating an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpeakerDirectory {
    speakers: HashMap<String, Speaker>,
}

impl SpeakerDirectory {
    /// Duplicate keys keep the first speaker seen.
    pub fn new(speakers: Vec<Speaker>) -> Self {
        let mut index = HashMap::with_capacity(speakers.len());
        for speaker in speakers {
            if index.contains_key(&speaker.key) {
                warn!(speaker = %speaker.key, "Duplicate speaker key, keeping first entry");
                continue;
            }
            index.insert(speaker.key.clone(), speaker);
        }
        Self { speakers: index }
    }

    /// Parses a YAML list of speaker records.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let speakers: Vec<Speaker> = serde_yaml::from_str(content)?;
        Ok(Self::new(speakers))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let directory = Self::from_yaml(&content)?;
        debug!("Loaded {} speakers from {}", directory.len(), path.as_ref().display());
        Ok(directory)
    }

    pub fn lookup(&self, key: &str) -> Lookup<PartialSpeaker> {
        match self.speakers.get(key) {
            Some(speaker) => Lookup::Found(PartialSpeaker::from(speaker)),
            None => Lookup::NotFound,
        }
    }

    pub fn resolve(&self, key: &str) -> Result<PartialSpeaker> {
        self.lookup(key)
            .into_option()
            .ok_or_else(|| SiteError::SpeakerNotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.speakers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.speakers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }
}

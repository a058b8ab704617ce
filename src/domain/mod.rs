use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DAY_ONE_DATE, DAY_ONE_PREFIX, DAY_TWO_DATE, SPEAKERS_PATH_PREFIX};

/// A scheduled talk as exported by the program committee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub key: String,
    pub title: String,
    pub slot: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub talk_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub complexity: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub cancelled: bool,
    pub speakers: Option<Vec<String>>,
    pub youtube: Option<String>,
    pub slides: Option<String>,
    pub openfeedback_id: Option<String>,
    #[serde(rename = "abstract")]
    pub summary: Option<String>,
}

impl Session {
    pub fn day(&self) -> ConferenceDay {
        ConferenceDay::from_slot_key(&self.slot)
    }

    /// Speaker keys in display order; empty when the session has no speakers.
    pub fn speaker_keys(&self) -> &[String] {
        self.speakers.as_deref().unwrap_or(&[])
    }

    pub fn has_media(&self) -> bool {
        self.youtube.is_some() || self.slides.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub key: String,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

impl Slot {
    pub fn day(&self) -> ConferenceDay {
        ConferenceDay::from_slot_key(&self.key)
    }
}

/// On-disk shape of the slot table: `{"slots": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotFile {
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConferenceDay {
    DayOne,
    DayTwo,
}

impl ConferenceDay {
    /// Binary split on the `day-1` prefix; unknown keys land on the second day.
    pub fn from_slot_key(slot_key: &str) -> Self {
        if slot_key.starts_with(DAY_ONE_PREFIX) {
            ConferenceDay::DayOne
        } else {
            ConferenceDay::DayTwo
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConferenceDates {
    pub day_one: NaiveDate,
    pub day_two: NaiveDate,
}

impl Default for ConferenceDates {
    fn default() -> Self {
        let (y1, m1, d1) = DAY_ONE_DATE;
        let (y2, m2, d2) = DAY_TWO_DATE;
        Self {
            day_one: NaiveDate::from_ymd_opt(y1, m1, d1).expect("day one is a valid calendar date"),
            day_two: NaiveDate::from_ymd_opt(y2, m2, d2).expect("day two is a valid calendar date"),
        }
    }
}

impl ConferenceDates {
    pub fn date_for(&self, day: ConferenceDay) -> NaiveDate {
        match day {
            ConferenceDay::DayOne => self.day_one,
            ConferenceDay::DayTwo => self.day_two,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub icon: String,
    pub link: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Full speaker record from the speakers data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub key: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub company: Option<String>,
    pub company_logo: Option<String>,
    pub city: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub socials: Vec<Social>,
}

/// Card view of a speaker. Biography and social links are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSpeaker {
    pub key: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub city: Option<String>,
    pub company: Option<String>,
    pub company_logo: Option<String>,
}

impl PartialSpeaker {
    pub fn profile_path(&self) -> String {
        format!("{}{}", SPEAKERS_PATH_PREFIX, self.key)
    }
}

impl From<&Speaker> for PartialSpeaker {
    fn from(speaker: &Speaker) -> Self {
        Self {
            key: speaker.key.clone(),
            name: speaker.name.clone(),
            photo_url: speaker.photo_url.clone(),
            city: speaker.city.clone(),
            company: speaker.company.clone(),
            company_logo: speaker.company_logo.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_day_from_slot_key() {
        assert_eq!(ConferenceDay::from_slot_key("day-1-A"), ConferenceDay::DayOne);
        assert_eq!(ConferenceDay::from_slot_key("day-2-B"), ConferenceDay::DayTwo);
        assert_eq!(ConferenceDay::from_slot_key("keynote"), ConferenceDay::DayTwo);
    }

    #[test]
    fn test_default_dates() {
        let dates = ConferenceDates::default();
        assert_eq!(dates.date_for(ConferenceDay::DayOne).to_string(), "2022-10-19");
        assert_eq!(dates.date_for(ConferenceDay::DayTwo).to_string(), "2022-10-20");
    }

    #[test]
    fn test_session_deserializes_camel_case() {
        let session: Session = serde_json::from_value(json!({
            "key": "rust-in-prod",
            "title": "Rust in production",
            "slot": "day-1-A",
            "room": "Jules Verne",
            "talkType": "conference",
            "tags": ["backend"],
            "openfeedbackId": "abc",
            "abstract": "Some text"
        }))
        .unwrap();

        assert_eq!(session.talk_type, "conference");
        assert_eq!(session.openfeedback_id.as_deref(), Some("abc"));
        assert_eq!(session.summary.as_deref(), Some("Some text"));
        assert!(!session.cancelled);
        assert!(session.speaker_keys().is_empty());
        assert!(!session.has_media());
        assert_eq!(session.day(), ConferenceDay::DayOne);
    }

    #[test]
    fn test_partial_speaker_drops_bio_and_socials() {
        let speaker = Speaker {
            key: "jdoe".to_string(),
            name: "Jane Doe".to_string(),
            photo_url: Some("/photos/jdoe.jpg".to_string()),
            company: Some("Acme".to_string()),
            company_logo: None,
            city: Some("Nantes".to_string()),
            bio: Some("Long biography".to_string()),
            socials: vec![Social {
                icon: "github".to_string(),
                link: "https://github.com/jdoe".to_string(),
                name: None,
            }],
        };

        let partial = PartialSpeaker::from(&speaker);
        let as_json = serde_json::to_value(&partial).unwrap();

        assert_eq!(partial.name, "Jane Doe");
        assert_eq!(partial.profile_path(), "/speakers/jdoe");
        assert!(as_json.get("bio").is_none());
        assert!(as_json.get("socials").is_none());
        assert_eq!(as_json["photoUrl"], "/photos/jdoe.jpg");
    }
}

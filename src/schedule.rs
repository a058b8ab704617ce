use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{ConferenceDay, Slot, SlotFile};
use crate::error::Result;

/// Localized names of the two conference days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabels {
    pub day_one: String,
    pub day_two: String,
}

impl DayLabels {
    pub fn for_day(&self, day: ConferenceDay) -> &str {
        match day {
            ConferenceDay::DayOne => &self.day_one,
            ConferenceDay::DayTwo => &self.day_two,
        }
    }
}

/// Slot table indexed by key, built once when the site data is loaded.
#[derive(Debug, Clone, Default)]
pub struct SlotTable {
    slots: HashMap<String, Slot>,
}

impl SlotTable {
    /// Duplicate keys keep the first slot seen.
    pub fn new(slots: Vec<Slot>) -> Self {
        let mut index = HashMap::with_capacity(slots.len());
        for slot in slots {
            if index.contains_key(&slot.key) {
                warn!(slot = %slot.key, "Duplicate slot key, keeping first entry");
                continue;
            }
            index.insert(slot.key.clone(), slot);
        }
        Self { slots: index }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: SlotFile = serde_json::from_str(content)?;
        Ok(Self::new(file.slots))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let table = Self::from_json(&content)?;
        debug!("Loaded {} slots from {}", table.len(), path.as_ref().display());
        Ok(table)
    }

    pub fn get(&self, slot_key: &str) -> Option<&Slot> {
        self.slots.get(slot_key)
    }

    pub fn contains(&self, slot_key: &str) -> bool {
        self.slots.contains_key(slot_key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `"<day> <start>"` for a known slot. An unknown slot still gets its day
    /// label, without a start time.
    pub fn label(&self, slot_key: &str, labels: &DayLabels) -> String {
        let day = labels.for_day(ConferenceDay::from_slot_key(slot_key));
        match self.slots.get(slot_key) {
            Some(slot) => format!("{} {}", day, slot.start),
            None => {
                warn!(slot = %slot_key, "Slot not found, label has no start time");
                day.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> DayLabels {
        DayLabels {
            day_one: "Wednesday".to_string(),
            day_two: "Thursday".to_string(),
        }
    }

    fn table() -> SlotTable {
        SlotTable::from_json(
            r#"{"slots": [
                {"key": "day-1-A", "start": "09:00", "end": "09:45"},
                {"key": "day-1-B", "start": "10:00"},
                {"key": "day-2-B", "start": "14:30", "end": "15:20"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_label_for_known_slots() {
        let table = table();
        assert_eq!(table.label("day-1-A", &labels()), "Wednesday 09:00");
        assert_eq!(table.label("day-1-B", &labels()), "Wednesday 10:00");
        assert_eq!(table.label("day-2-B", &labels()), "Thursday 14:30");
    }

    #[test]
    fn test_label_for_unknown_slot_has_no_start_time() {
        let table = table();
        let label = table.label("day-2-Z", &labels());
        assert_eq!(label, "Thursday");
        assert!(!label.contains("undefined"));
    }

    #[test]
    fn test_duplicate_keys_keep_first() {
        let table = SlotTable::new(vec![
            Slot { key: "day-1-A".to_string(), start: "09:00".to_string(), end: None },
            Slot { key: "day-1-A".to_string(), start: "11:00".to_string(), end: None },
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("day-1-A").unwrap().start, "09:00");
    }

    #[test]
    fn test_slot_day_grouping() {
        let table = table();
        assert_eq!(table.get("day-1-A").unwrap().day(), ConferenceDay::DayOne);
        assert_eq!(table.get("day-2-B").unwrap().day(), ConferenceDay::DayTwo);
        assert!(table.contains("day-1-B"));
        assert!(!table.is_empty());
    }
}

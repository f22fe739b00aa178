//! # Program Data Module
//!
//! The immutable conference program: tracks, slots and events, bundled into
//! the binary at compile time and parsed once at startup. Nothing here is
//! mutated afterwards.
//!
//! ## Derived event identifiers
//! An event has no id of its own in the dataset. Its identifier is derived
//! from the owning slot id plus the percent-encoded title, and doubles as
//! the value persisted by the selection store. Two events with the same
//! title in the same slot would collide; the current dataset never does
//! this and the first match in dataset order wins.

use crate::error::ProgramError;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

/// The raw dataset shipped inside the binary.
const PROGRAM_JSON: &str = include_str!("../data/program.json");

/// Characters left untouched by JavaScript's `encodeURIComponent`, beyond
/// ASCII alphanumerics. Selections persisted by earlier builds used that
/// encoding, so the derived ids have to keep matching it byte for byte.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A named category/room grouping events
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
}

/// A labelled time block of the schedule. `label` is an "HH:MM" string and
/// slots are listed in non-decreasing label order in the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    pub id: String,
    pub label: String,
}

/// A scheduled talk within a slot
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "slotId")]
    pub slot_id: String,
    /// May be absent, or present but matching no known track
    #[serde(default, rename = "trackId")]
    pub track_id: Option<String>,
    #[serde(default)]
    pub speaker: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgramData {
    pub tracks: Vec<Track>,
    pub slots: Vec<Slot>,
    pub events: Vec<Event>,
}

impl ProgramData {
    /// Parse the compile-time-bundled dataset
    pub fn bundled() -> Result<Self, ProgramError> {
        serde_json::from_str(PROGRAM_JSON).map_err(ProgramError::ParseFailed)
    }

    /// Resolve a track id to its display name, if known
    pub fn track_name(&self, track_id: &str) -> Option<&str> {
        self.tracks
            .iter()
            .find(|track| track.id == track_id)
            .map(|track| track.name.as_str())
    }

    /// Events belonging to a slot, in dataset order, each paired with its
    /// derived identifier
    pub fn events_in_slot<'a>(
        &'a self,
        slot_id: &'a str,
    ) -> impl Iterator<Item = (&'a Event, String)> + 'a {
        self.events
            .iter()
            .filter(move |event| event.slot_id == slot_id)
            .map(move |event| (event, derive_event_id(slot_id, &event.title)))
    }
}

/// Derived identifier for an event within a slot: the slot id joined to the
/// percent-encoded title. Not collision-free across duplicate titles within
/// a slot; accepted dataset limitation.
pub fn derive_event_id(slot_id: &str, title: &str) -> String {
    format!("{}_{}", slot_id, utf8_percent_encode(title, COMPONENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_program() -> ProgramData {
        ProgramData {
            tracks: vec![Track {
                id: "track-a".to_string(),
                name: "Sal A".to_string(),
            }],
            slots: vec![Slot {
                id: "slot-0900".to_string(),
                label: "09:00".to_string(),
            }],
            events: vec![
                Event {
                    slot_id: "slot-0900".to_string(),
                    track_id: Some("track-a".to_string()),
                    speaker: "Ida".to_string(),
                    title: "CSS som skalerer".to_string(),
                    description: String::new(),
                    kind: "lyntale".to_string(),
                },
                Event {
                    slot_id: "slot-other".to_string(),
                    track_id: None,
                    speaker: String::new(),
                    title: "Lunsj".to_string(),
                    description: String::new(),
                    kind: "pause".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_derive_event_id_encodes_spaces() {
        assert_eq!(
            derive_event_id("slot-1", "CSS som skalerer"),
            "slot-1_CSS%20som%20skalerer"
        );
    }

    #[test]
    fn test_derive_event_id_keeps_unreserved_marks() {
        // encodeURIComponent leaves - _ . ! ~ * ' ( ) alone
        assert_eq!(
            derive_event_id("s", "a-b_c.d!e~f*g'h(i)j"),
            "s_a-b_c.d!e~f*g'h(i)j"
        );
    }

    #[test]
    fn test_derive_event_id_encodes_reserved_and_non_ascii() {
        assert_eq!(derive_event_id("s", "a&b"), "s_a%26b");
        assert_eq!(derive_event_id("s", "blåbær"), "s_bl%C3%A5b%C3%A6r");
    }

    #[test]
    fn test_events_in_slot_filters_by_slot() {
        let program = sample_program();
        let events: Vec<_> = program.events_in_slot("slot-0900").collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0.title, "CSS som skalerer");
        assert_eq!(events[0].1, "slot-0900_CSS%20som%20skalerer");
    }

    #[test]
    fn test_track_name_lookup() {
        let program = sample_program();
        assert_eq!(program.track_name("track-a"), Some("Sal A"));
        assert_eq!(program.track_name("track-missing"), None);
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let program = ProgramData::bundled().expect("bundled dataset must parse");
        assert!(!program.slots.is_empty());
        assert!(!program.events.is_empty());
        // every event points at a slot that exists
        for event in &program.events {
            assert!(
                program.slots.iter().any(|slot| slot.id == event.slot_id),
                "event {:?} references unknown slot {}",
                event.title,
                event.slot_id
            );
        }
    }
}

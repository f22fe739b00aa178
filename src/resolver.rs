//! # Current Event Resolution Module
//!
//! Pure functions deciding which slot, and which chosen event within it,
//! is happening "now". The caller injects `now`, so none of this depends
//! on the wall clock and tests run without real waits.
//!
//! A slot counts as started a few minutes before its labelled time; the
//! grace offset tolerates early arrivals and clock skew. Among started
//! slots the latest one wins (slots come pre-sorted by label).

use crate::program::{derive_event_id, Event, ProgramData, Slot};
use crate::store::SelectionStore;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Nominal start instant of a slot on `date`: the "HH:MM" label minus the
/// grace offset. `None` when the label is not a valid "HH:MM" string.
pub fn slot_start(date: NaiveDate, label: &str, grace_minutes: i64) -> Option<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(label, "%H:%M").ok()?;
    Some(date.and_time(time) - Duration::minutes(grace_minutes))
}

/// The latest slot whose adjusted start is at or before `now`, if any
pub fn current_slot<'a>(
    now: NaiveDateTime,
    slots: &'a [Slot],
    grace_minutes: i64,
) -> Option<&'a Slot> {
    slots
        .iter()
        .filter(|slot| {
            slot_start(now.date(), &slot.label, grace_minutes)
                .map_or(false, |start| start <= now)
        })
        .last()
}

/// The event the user chose for the current slot, if the slot has started,
/// a selection is stored, and that selection still matches an event.
/// Pure read; no side effects.
pub fn current_event<'a>(
    now: NaiveDateTime,
    program: &'a ProgramData,
    store: &SelectionStore,
    grace_minutes: i64,
) -> Option<&'a Event> {
    let slot = current_slot(now, &program.slots, grace_minutes)?;
    let selected = store.get(&slot.id)?;

    program.events.iter().find(|event| {
        event.slot_id == slot.id && derive_event_id(&slot.id, &event.title) == selected
    })
}

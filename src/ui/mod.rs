//! # UI Module
//!
//! View helpers composing the schedule screen: the "happening now" panel
//! and one card per slot. All widgets emit [`Message`](crate::app::Message)
//! values; nothing here touches state directly.

pub mod styles;

use crate::app::Message;
use crate::program::{Event, ProgramData, Slot};
use iced::widget::{checkbox, column, container, text};
use iced::{Element, Length};

/// Panel shown while an event is running: title, speaker with talk kind,
/// description and room/track, each omitted when empty or unresolved.
pub fn current_event_panel<'a>(
    event: &'a Event,
    track_name: Option<&'a str>,
) -> Element<'a, Message> {
    let mut lines: Vec<Element<'a, Message>> = vec![
        text("Akkurat nå").size(14).color(styles::muted_text()).into(),
        text(&event.title).size(24).into(),
    ];

    if !event.speaker.is_empty() {
        lines.push(
            text(format!("{} ({})", event.speaker, event.kind))
                .size(16)
                .color(styles::muted_text())
                .into(),
        );
    }
    if !event.description.is_empty() {
        lines.push(
            text(&event.description)
                .size(16)
                .color(styles::body_text())
                .into(),
        );
    }
    if let Some(name) = track_name {
        lines.push(text(name).size(13).into());
    }

    container(column(lines).spacing(8))
        .style(styles::card)
        .width(Length::Fill)
        .padding(20)
        .into()
}

/// Panel shown when no current event resolves
pub fn placeholder_panel<'a>() -> Element<'a, Message> {
    let content = column![
        text("Akkurat nå").size(14).color(styles::muted_text()),
        text("Velg en lyntale nedenfor!").size(20),
    ]
    .spacing(8);

    container(content)
        .style(styles::card)
        .width(Length::Fill)
        .padding(20)
        .into()
}

/// One card per slot: the "HH:MM" label followed by a row per event with a
/// checkbox bound to the slot's persisted selection
pub fn slot_card<'a>(
    slot: &'a Slot,
    program: &'a ProgramData,
    selection: Option<&'a str>,
) -> Element<'a, Message> {
    let events = program
        .events_in_slot(&slot.id)
        .map(|(event, event_id)| {
            let selected = selection == Some(event_id.as_str());
            event_row(slot, event, event_id, selected, program)
        });

    let content = column![
        text(&slot.label).size(18),
        column(events).spacing(15),
    ]
    .spacing(12);

    container(content)
        .style(styles::card)
        .width(Length::Fill)
        .padding(20)
        .into()
}

fn event_row<'a>(
    slot: &'a Slot,
    event: &'a Event,
    event_id: String,
    selected: bool,
    program: &'a ProgramData,
) -> Element<'a, Message> {
    let slot_id = slot.id.clone();
    let going = checkbox(event.title.clone(), selected)
        .size(18)
        .text_size(17)
        .on_toggle(move |_| Message::ToggleEvent {
            slot_id: slot_id.clone(),
            event_id: event_id.clone(),
        });

    let mut lines: Vec<Element<'a, Message>> = vec![going.into()];

    if !event.speaker.is_empty() {
        lines.push(
            text(&event.speaker)
                .size(15)
                .color(styles::muted_text())
                .into(),
        );
    }
    if !event.description.is_empty() {
        lines.push(
            text(&event.description)
                .size(15)
                .color(styles::body_text())
                .into(),
        );
    }
    if let Some(name) = event
        .track_id
        .as_deref()
        .and_then(|id| program.track_name(id))
    {
        lines.push(text(name).size(13).into());
    }

    column(lines).spacing(4).into()
}

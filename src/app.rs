//! # Application Module
//!
//! Top-level iced state and update loop. The model holds the immutable
//! program, the selection store and the current wall-clock instant; a 1 Hz
//! subscription refreshes "now" so the happening-now panel follows the
//! clock without user input. iced tears the subscription down with the
//! window, so no timer outlives the app.

use crate::config::Config;
use crate::program::ProgramData;
use crate::resolver;
use crate::store::SelectionStore;
use crate::ui;
use chrono::{Local, NaiveDateTime};
use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Subscription, Task};

pub struct ProgramViewer {
    program: ProgramData,
    store: SelectionStore,
    config: Config,
    now: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic clock tick; refreshes the displayed "now"
    Tick,
    /// Checkbox toggled for an event; selects it, or deselects it when it
    /// already is the slot's selection
    ToggleEvent { slot_id: String, event_id: String },
}

impl ProgramViewer {
    pub fn new(
        program: ProgramData,
        store: SelectionStore,
        config: Config,
    ) -> (Self, Task<Message>) {
        (
            ProgramViewer {
                program,
                store,
                config,
                now: Local::now().naive_local(),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.now = Local::now().naive_local();
                Task::none()
            }
            Message::ToggleEvent { slot_id, event_id } => {
                if self.store.get(&slot_id) == Some(event_id.as_str()) {
                    self.store.clear(&slot_id);
                } else {
                    self.store.set(&slot_id, &event_id);
                }
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::time::every(std::time::Duration::from_secs(1)).map(|_| Message::Tick)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = match resolver::current_event(
            self.now,
            &self.program,
            &self.store,
            self.config.grace_minutes,
        ) {
            Some(event) => {
                let track_name = event
                    .track_id
                    .as_deref()
                    .and_then(|id| self.program.track_name(id));
                ui::current_event_panel(event, track_name)
            }
            None => ui::placeholder_panel(),
        };

        let slots = self
            .program
            .slots
            .iter()
            .map(|slot| ui::slot_card(slot, &self.program, self.store.get(&slot.id)));

        let content = column![header, column(slots).spacing(15)]
            .spacing(20)
            .padding(30)
            .max_width(900);

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }
}

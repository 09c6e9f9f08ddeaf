use chrono::Weekday;
use easy_widget_core::{Entry, EntryProvider, SharedStore, WidgetView};
use log::warn;

use crate::sink::DeferredSink;

pub struct App<S: SharedStore> {
    provider: EntryProvider<S>,
    first_weekday: Weekday,
    pub entry: Entry,
    pub view: WidgetView,
    pub sink: DeferredSink,
    pub status: Option<String>,
}

impl<S: SharedStore> App<S> {
    /// Starts on the placeholder entry; call [`App::load`] for real data.
    pub fn new(provider: EntryProvider<S>, first_weekday: Weekday) -> App<S> {
        let entry = provider.placeholder();
        let view = WidgetView::from_entry(&entry, first_weekday);
        App {
            provider,
            first_weekday,
            entry,
            view,
            sink: DeferredSink::default(),
            status: None,
        }
    }

    /// Replace the entry on screen with one read from the store.
    pub fn load(&mut self) {
        self.entry = self.provider.current();
        self.view = WidgetView::from_entry(&self.entry, self.first_weekday);
    }

    pub fn refresh(&mut self) {
        self.load();
        self.status = Some(format!("Refreshed {}", self.entry.timestamp.format("%H:%M:%S")));
    }

    pub fn activate(&mut self) {
        match self.view.activate(&mut self.sink) {
            Ok(()) => self.status = Some(format!("Sent {}", self.view.control.link)),
            Err(e) => {
                warn!("activating control: {}", e);
                self.status = Some(format!("Failed: {}", e));
            }
        }
    }

    pub fn namespace(&self) -> &str {
        self.provider.namespace()
    }
}

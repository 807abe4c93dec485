/// Record of one applied state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// View-state revision produced by the transition.
    pub revision: u64,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, revision: u64, kind: &'static str, message: impl Into<String>) {
        self.events.push(Event {
            revision,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

//! Viewer session: owns the view state, both renderers and the transition log.

use layers::AttributePanel;
use render::{RenderFrame, RendererSet};
use tracing::debug;

use crate::event_bus::{Event, EventBus};
use crate::view_state::{Action, StatusLine, ViewState};

#[derive(Debug, Default)]
pub struct Session {
    state: ViewState,
    renderers: RendererSet,
    events: EventBus,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn renderers(&self) -> &RendererSet {
        &self.renderers
    }

    pub fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        let message = action.to_string();
        self.state = std::mem::take(&mut self.state).apply(action);
        debug!(
            revision = self.state.revision(),
            kind,
            %message,
            "view state updated"
        );
        self.events.emit(self.state.revision(), kind, message);
    }

    pub fn status(&self) -> StatusLine {
        self.state.status()
    }

    /// Draws the current catalog with the selected backend and theme.
    pub fn frame(&mut self) -> RenderFrame {
        let state = &self.state;
        self.renderers.render(
            state.backend(),
            state.catalog(),
            state.theme(),
            state.highlight(),
        )
    }

    pub fn inspect(&self, name: &str) -> Vec<AttributePanel> {
        self.renderers
            .get(self.state.backend())
            .inspect(self.state.catalog(), name)
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain()
    }
}

// src/detail/panel.rs
// =============================================================================
// State of the documentation section of the detail view.
//
// The README is resolved after the entry itself has loaded, and the entry
// (and so the source link) can change while a resolution is still running.
// Each resolution therefore gets a ticket; a result is only applied when it
// carries the ticket of the latest resolution. Older results are dropped
// instead of overwriting newer state.
//
//   Hidden --begin--> Pending(ticket) --complete(ticket)--> Ready(result)
//             ^                                                 |
//             +---------------------- begin --------------------+
// =============================================================================

use tracing::debug;

use crate::github::DocumentFetchResult;

/// Identifies one resolution started by [`DocumentPanel::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelState {
    /// No documentation section (README lookup disabled)
    #[default]
    Hidden,
    /// A resolution is running
    Pending(Ticket),
    /// The latest resolution finished
    Ready(DocumentFetchResult),
}

#[derive(Debug, Default)]
pub struct DocumentPanel {
    state: PanelState,
    generation: u64,
    reference: Option<String>,
}

impl DocumentPanel {
    pub fn new() -> Self {
        Self::default()
    }

    // Starts a fresh resolution for `reference`
    //
    // Any previous result is thrown away, never merged with the new one
    pub fn begin(&mut self, reference: &str) -> Ticket {
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.state = PanelState::Pending(ticket);
        self.reference = Some(reference.to_string());
        ticket
    }

    /// Applies a result if `ticket` is still current; returns whether it was applied.
    pub fn complete(&mut self, ticket: Ticket, result: DocumentFetchResult) -> bool {
        match self.state {
            PanelState::Pending(current) if current == ticket => {
                self.state = PanelState::Ready(result);
                true
            }
            _ => {
                debug!(?ticket, "discarding stale README result");
                false
            }
        }
    }

    /// Drops the section; a result still in flight will be discarded
    pub fn hide(&mut self) {
        self.generation += 1;
        self.state = PanelState::Hidden;
        self.reference = None;
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}

//! Mode transition notifications

use crate::mode::Mode;

/// Who caused a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionSource {
    /// The gesture debouncer committed it
    Gesture,
    /// A direct call, e.g. a UI toggle
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeEvent {
    pub mode: Mode,
    pub source: TransitionSource,
}

type Listener = Box<dyn FnMut(ModeEvent)>;

/// Delivers each published transition once to every listener and keeps it
/// queued for drain-style consumers.
#[derive(Default)]
pub struct ModeEventBus {
    listeners: Vec<Listener>,
    events: Vec<ModeEvent>,
}

impl ModeEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked on every published transition
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(ModeEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn publish(&mut self, event: ModeEvent) {
        log::debug!("mode -> {} ({:?})", event.mode, event.source);
        for listener in &mut self.listeners {
            listener(event);
        }
        self.events.push(event);
    }

    /// Drain all queued events, returning them
    pub fn drain(&mut self) -> Vec<ModeEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

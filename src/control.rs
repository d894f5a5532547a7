//! Interactive control handles driven by the host toolkit.
//!
//! These are the engine's view of a native toggle or text input: a displayed
//! value, a focus flag, and a list of event targets. A toolkit binding mirrors
//! user input into them and forwards native events through
//! [`Switch::send_actions`] / [`TextField::send_actions`]. Programmatic writes
//! (`set_on`, `set_text`) never fire events.

#[cfg(feature = "no_std")]
use alloc::{string::String, vec::Vec};

use portable_atomic_util::{Arc, Weak};
use spin::Mutex;

use crate::EventAdapter;

/// Native events a control can deliver to its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// A toggle's value was changed by the user.
    ValueChanged,
    /// A text input stopped editing (focus moved away).
    EditingDidEnd,
    /// A text input stopped editing because the user submitted it.
    EditingDidEndOnExit,
}

/// Weakly held event targets of one control.
#[derive(Default)]
struct Targets {
    entries: Mutex<Vec<(ControlEvent, Weak<EventAdapter>)>>,
}

impl Targets {
    fn add(&self, adapter: &Arc<EventAdapter>, event: ControlEvent) {
        self.entries.lock().push((event, Arc::downgrade(adapter)));
    }

    fn send(&self, event: ControlEvent) {
        // Collect first: the callbacks may rebuild the form, which must not
        // happen while this control's target list is locked.
        let live: Vec<Arc<EventAdapter>> = {
            let entries = self.entries.lock();
            entries
                .iter()
                .filter(|(registered, _)| *registered == event)
                .filter_map(|(_, adapter)| adapter.upgrade())
                .collect()
        };

        if live.is_empty() {
            tracing::trace!(?event, "no live targets for control event");
        }

        for adapter in live {
            adapter.notify();
        }
    }

    fn live(&self) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|(_, adapter)| adapter.upgrade().is_some())
            .count()
    }
}

/// A boolean toggle.
#[derive(Default)]
pub struct Switch {
    is_on: Mutex<bool>,
    targets: Targets,
}

impl Switch {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn is_on(&self) -> bool {
        *self.is_on.lock()
    }

    /// Set the displayed value without notifying targets.
    pub fn set_on(&self, on: bool) {
        *self.is_on.lock() = on;
    }

    /// Register `adapter` for `event`. The control does not keep it alive.
    pub fn add_target(&self, adapter: &Arc<EventAdapter>, event: ControlEvent) {
        self.targets.add(adapter, event);
    }

    /// Deliver `event` to every live target registered for it.
    pub fn send_actions(&self, event: ControlEvent) {
        self.targets.send(event);
    }

    /// The user flipped the toggle to `on`.
    pub fn toggle_to(&self, on: bool) {
        self.set_on(on);
        self.send_actions(ControlEvent::ValueChanged);
    }

    /// Number of registered targets that are still alive.
    pub fn live_targets(&self) -> usize {
        self.targets.live()
    }
}

/// A single-line text input.
#[derive(Default)]
pub struct TextField {
    text: Mutex<String>,
    focused: Mutex<bool>,
    targets: Targets,
}

impl TextField {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn text(&self) -> String {
        self.text.lock().clone()
    }

    /// Set the displayed text without notifying targets.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.lock() = text.into();
    }

    /// The user typed `text` into the field. Editing is not committed until
    /// one of the end-of-editing events fires.
    pub fn type_text(&self, text: impl Into<String>) {
        *self.focused.lock() = true;
        self.set_text(text);
    }

    /// Focus moved away from the field.
    pub fn end_editing(&self) {
        *self.focused.lock() = false;
        self.send_actions(ControlEvent::EditingDidEnd);
    }

    /// The user submitted the field (return key).
    pub fn submit(&self) {
        *self.focused.lock() = false;
        self.send_actions(ControlEvent::EditingDidEndOnExit);
    }

    pub fn is_focused(&self) -> bool {
        *self.focused.lock()
    }

    pub fn become_first_responder(&self) {
        *self.focused.lock() = true;
    }

    /// Register `adapter` for `event`. The control does not keep it alive.
    pub fn add_target(&self, adapter: &Arc<EventAdapter>, event: ControlEvent) {
        self.targets.add(adapter, event);
    }

    /// Deliver `event` to every live target registered for it.
    pub fn send_actions(&self, event: ControlEvent) {
        self.targets.send(event);
    }

    /// Number of registered targets that are still alive.
    pub fn live_targets(&self) -> usize {
        self.targets.live()
    }
}

/// A control produced by a field renderer.
#[derive(Clone)]
pub enum View {
    Switch(Arc<Switch>),
    TextField(Arc<TextField>),
}

impl View {
    pub fn as_switch(&self) -> Option<&Arc<Switch>> {
        match self {
            View::Switch(switch) => Some(switch),
            View::TextField(_) => None,
        }
    }

    pub fn as_text_field(&self) -> Option<&Arc<TextField>> {
        match self {
            View::TextField(field) => Some(field),
            View::Switch(_) => None,
        }
    }

    /// Give keyboard focus to the control. Returns `false` for controls that
    /// cannot take focus.
    pub fn become_first_responder(&self) -> bool {
        match self {
            View::TextField(field) => {
                field.become_first_responder();
                true
            }
            View::Switch(_) => false,
        }
    }
}

impl core::fmt::Debug for View {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            View::Switch(switch) => f.debug_tuple("Switch").field(&switch.is_on()).finish(),
            View::TextField(field) => f.debug_tuple("TextField").field(&field.text()).finish(),
        }
    }
}

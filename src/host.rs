//! List-display host abstraction.

#[cfg(feature = "no_std")]
use alloc::string::String;
#[cfg(any(test, feature = "testing"))]
#[cfg(feature = "no_std")]
use alloc::{boxed::Box, vec::Vec};

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

use crate::FormTable;

/// The list view that displays a form's sections.
///
/// Implement this trait to put a form on screen with your UI toolkit (a table
/// view, a terminal list, a test double). The driver calls it once when it is
/// constructed and again after every rebuild; the host reads rows, highlight flags and footers from the
/// [`FormTable`] it is given, and routes row taps back through
/// [`FormDriver::select_row`](crate::FormDriver::select_row).
///
/// Implementations must not call back into the driver from these methods.
///
/// # Example
///
/// ```rust
/// use oxide_forms::{FormTable, ListHost};
///
/// struct PrintingHost;
///
/// impl ListHost for PrintingHost {
///     fn reload_data(&mut self, table: &FormTable) {
///         println!("{} sections", table.number_of_sections());
///     }
///     fn set_animations_enabled(&mut self, _enabled: bool) {}
///     fn begin_updates(&mut self) {}
///     fn set_footer_text(&mut self, section: usize, text: Option<String>) {
///         println!("footer {section}: {text:?}");
///     }
///     fn end_updates(&mut self) {}
/// }
/// ```
pub trait ListHost {
    /// Re-read every section and row from `table`.
    fn reload_data(&mut self, table: &FormTable);

    fn set_animations_enabled(&mut self, enabled: bool);

    /// Open a batch of in-place updates.
    fn begin_updates(&mut self);

    /// Replace the text of the footer already displayed for `section`.
    ///
    /// A full reload does not refresh footer views that are already on screen,
    /// which is why the driver sets them separately.
    fn set_footer_text(&mut self, section: usize, text: Option<String>);

    /// Close the batch opened by [`begin_updates`](Self::begin_updates).
    fn end_updates(&mut self);
}

#[cfg(any(test, feature = "testing"))]
/// One call received by a [`TestListHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// `reload_data`, with the footer titles the table held at that moment.
    ReloadData { footers: Vec<Option<String>> },
    SetAnimationsEnabled(bool),
    BeginUpdates,
    SetFooterText(usize, Option<String>),
    EndUpdates,
}

#[cfg(any(test, feature = "testing"))]
/// Test host that records every call for assertions.
///
/// Only available with the `testing` feature.
///
/// # Example
///
/// ```rust
/// use oxide_forms::{field, sections, section, control_cell, ui_switch, FormDriver, FormOptions, TestListHost};
///
/// #[derive(Clone)]
/// struct State { enabled: bool }
///
/// let host = TestListHost::new();
/// let driver = FormDriver::new(
///     State { enabled: false },
///     FormOptions::new("Settings"),
///     |context: &oxide_forms::RenderingContext<State>| {
///         sections([section(
///             [control_cell("Enabled", ui_switch(context, field!(State, enabled)))],
///             None,
///         )])
///     },
///     host.boxed(),
/// );
///
/// driver.change(|state| state.enabled = true).unwrap();
/// assert_eq!(host.reload_count(), 2);
/// ```
pub struct TestListHost {
    calls: Arc<Mutex<Vec<HostCall>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Clone for TestListHost {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl ListHost for TestListHost {
    fn reload_data(&mut self, table: &FormTable) {
        let footers = (0..table.number_of_sections())
            .map(|section| table.footer_title(section).map(String::from))
            .collect();
        self.calls.lock().push(HostCall::ReloadData { footers });
    }

    fn set_animations_enabled(&mut self, enabled: bool) {
        self.calls.lock().push(HostCall::SetAnimationsEnabled(enabled));
    }

    fn begin_updates(&mut self) {
        self.calls.lock().push(HostCall::BeginUpdates);
    }

    fn set_footer_text(&mut self, section: usize, text: Option<String>) {
        self.calls.lock().push(HostCall::SetFooterText(section, text));
    }

    fn end_updates(&mut self) {
        self.calls.lock().push(HostCall::EndUpdates);
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for TestListHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl TestListHost {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a boxed host to pass to the driver.
    ///
    /// The returned host shares its call log with this `TestListHost`.
    pub fn boxed(&self) -> Box<dyn ListHost + Send> {
        Box::new(self.clone())
    }

    /// Number of calls recorded so far.
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Number of `reload_data` calls recorded so far.
    pub fn reload_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::ReloadData { .. }))
            .count()
    }

    /// Most recent footer text set for `section`, if any.
    pub fn footer_text(&self, section: usize) -> Option<Option<String>> {
        self.calls.lock().iter().rev().find_map(|call| match call {
            HostCall::SetFooterText(index, text) if *index == section => Some(text.clone()),
            _ => None,
        })
    }

    /// Access the recorded calls with a closure.
    pub fn with_calls<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<HostCall>) -> R,
    {
        let calls = self.calls.lock();
        f(&calls)
    }

    /// Forget every call recorded so far.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

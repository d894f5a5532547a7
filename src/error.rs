//! Errors surfaced by the rebuild cycle.

use thiserror::Error;

/// Failures a [`RenderingContext`](crate::RenderingContext) or
/// [`FormDriver`](crate::FormDriver) can report.
///
/// None of these leave the driver in a broken state: a rejected request has no
/// effect on the authoritative State.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// The driver behind a context has already been dropped.
    #[error("the form driver behind this context has been released")]
    DriverReleased,

    /// `change` was called while a rebuild from an earlier `change` was running.
    #[error("change requested while a rebuild is already in progress")]
    ReentrantChange,

    /// A row was addressed that the current table does not contain.
    #[error("no row at section {section}, row {row}")]
    RowOutOfRange { section: usize, row: usize },
}

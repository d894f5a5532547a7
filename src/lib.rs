#![cfg_attr(feature = "no_std", no_std)]

//! A declarative form engine that renders a typed State into list sections and
//! rebuilds them on every change, with `no_std` support.
//!
//! A build function turns a [`RenderingContext`] into sections of cells. Field
//! renderers such as [`ui_switch`] and [`text_field`] bind one field of State,
//! named by a [`FieldAccessor`], to a control. When the user commits a value the
//! control's [`EventAdapter`] calls [`RenderingContext::change`]; the
//! [`FormDriver`] mutates its State, rebuilds the whole form and hands the new
//! rows to the [`ListHost`].
//!
//! ## Example
//!
//! ```rust
//! use oxide_forms::{
//!     control_cell, field, section, sections, text_field, ui_switch, FormDriver, FormOptions,
//!     IndexPath, RenderedElement, RenderingContext, Section, TestListHost,
//! };
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Settings { enabled: bool, name: String }
//!
//! fn build(context: &RenderingContext<Settings>) -> RenderedElement<Vec<Section>, Settings> {
//!     sections([section(
//!         [
//!             control_cell("Enabled", ui_switch(context, field!(Settings, enabled))),
//!             control_cell("Name", text_field(context, field!(Settings, name))),
//!         ],
//!         None,
//!     )])
//! }
//!
//! let host = TestListHost::new();
//! let driver = FormDriver::new(
//!     Settings { enabled: false, name: "x".to_string() },
//!     FormOptions::new("Settings"),
//!     build,
//!     host.boxed(),
//! );
//!
//! let name = driver.with_table(|table| {
//!     table.cell(IndexPath::new(0, 1)).unwrap().accessory().unwrap().as_text_field().unwrap().clone()
//! });
//! name.type_text("y");
//! name.end_editing();
//!
//! assert_eq!(driver.state(), Settings { enabled: false, name: "y".to_string() });
//! ```

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
mod accessor;
mod adapter;
mod context;
mod control;
mod driver;
mod element;
mod error;
mod field;
mod host;
mod navigation;
mod section;

// Public re-exports
pub use accessor::FieldAccessor;
pub use adapter::EventAdapter;
pub use context::RenderingContext;
pub use control::{ControlEvent, Switch, TextField, View};
pub use driver::{FormBuild, FormDriver, FormOptions};
pub use element::{RenderedElement, StrongReference};
pub use error::FormError;
pub use field::{text_field, ui_switch};
pub use host::ListHost;
pub use navigation::{NavigationQueue, NavigationRequest, Presentable};
pub use section::{
    control_cell, detail_text_cell, section, sections, FormCell, FormTable, IndexPath, Section,
};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use host::{HostCall, TestListHost};

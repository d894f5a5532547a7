//! Sections, cells, and the table data source the host reads from.

#[cfg(feature = "no_std")]
use alloc::{boxed::Box, string::String, vec::Vec};

use portable_atomic_util::Arc;
use spin::Mutex;

use crate::{RenderedElement, View};

/// Address of one row in a [`FormTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// One row of a form.
pub struct FormCell {
    title: String,
    detail: Mutex<Option<String>>,
    accessory: Option<View>,
    should_highlight: bool,
    did_select: Option<Box<dyn Fn() + Send + Sync>>,
}

impl FormCell {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: Mutex::new(None),
            accessory: None,
            should_highlight: false,
            did_select: None,
        }
    }

    /// Show `view` at the trailing edge of the row.
    pub fn with_accessory(mut self, view: View) -> Self {
        self.accessory = Some(view);
        self
    }

    /// Make the row highlight on touch and run `did_select` when tapped.
    pub fn on_select<F>(mut self, did_select: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.should_highlight = true;
        self.did_select = Some(Box::new(did_select));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn detail(&self) -> Option<String> {
        self.detail.lock().clone()
    }

    pub fn set_detail(&self, detail: Option<String>) {
        *self.detail.lock() = detail;
    }

    pub fn accessory(&self) -> Option<&View> {
        self.accessory.as_ref()
    }

    pub fn should_highlight(&self) -> bool {
        self.should_highlight
    }

    /// Run the selection callback, if the cell has one.
    pub fn select(&self) {
        if let Some(did_select) = &self.did_select {
            did_select();
        }
    }
}

impl core::fmt::Debug for FormCell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FormCell")
            .field("title", &self.title)
            .field("detail", &self.detail())
            .field("accessory", &self.accessory)
            .field("should_highlight", &self.should_highlight)
            .finish_non_exhaustive()
    }
}

/// An ordered group of cells with an optional footer.
///
/// Sections are rebuilt from scratch on every change and never edited in place.
#[derive(Debug, Clone, Default)]
pub struct Section {
    pub cells: Vec<Arc<FormCell>>,
    pub footer_title: Option<String>,
}

/// The data source a [`ListHost`](crate::ListHost) reads after each rebuild.
#[derive(Debug, Default)]
pub struct FormTable {
    sections: Vec<Section>,
}

impl FormTable {
    pub(crate) fn replace_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    /// Rows in `section`, or zero if there is no such section.
    pub fn number_of_rows(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |section| section.cells.len())
    }

    pub fn cell(&self, index_path: IndexPath) -> Option<&Arc<FormCell>> {
        self.sections
            .get(index_path.section)
            .and_then(|section| section.cells.get(index_path.row))
    }

    pub fn should_highlight(&self, index_path: IndexPath) -> bool {
        self.cell(index_path).is_some_and(|cell| cell.should_highlight())
    }

    pub fn footer_title(&self, section: usize) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|section| section.footer_title.as_deref())
    }
}

/// A row titled `title` that shows `control` as its accessory.
pub fn control_cell<State>(
    title: impl Into<String>,
    control: RenderedElement<View, State>,
) -> RenderedElement<Arc<FormCell>, State> {
    control.map(|view| Arc::new(FormCell::new(title).with_accessory(view)))
}

/// A selectable row titled `title` whose detail text is derived from State.
///
/// Typically used to push a nested form from `did_select`.
pub fn detail_text_cell<State, F>(
    title: impl Into<String>,
    detail: fn(&State) -> String,
    did_select: F,
) -> RenderedElement<Arc<FormCell>, State>
where
    State: 'static,
    F: Fn() + Send + Sync + 'static,
{
    let cell = Arc::new(FormCell::new(title).on_select(did_select));
    RenderedElement::new(cell.clone(), Vec::new(), move |state: &State| {
        cell.set_detail(Some(detail(state)));
    })
}

/// Group cells into a section.
pub fn section<State, I>(cells: I, footer_title: Option<String>) -> RenderedElement<Section, State>
where
    State: 'static,
    I: IntoIterator<Item = RenderedElement<Arc<FormCell>, State>>,
{
    RenderedElement::collect(cells).map(|cells| Section { cells, footer_title })
}

/// Combine sections into the element a build function returns.
pub fn sections<State, I>(sections: I) -> RenderedElement<Vec<Section>, State>
where
    State: 'static,
    I: IntoIterator<Item = RenderedElement<Section, State>>,
{
    RenderedElement::collect(sections)
}

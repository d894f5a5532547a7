//! The output of one render pass.

#[cfg(feature = "no_std")]
use alloc::{boxed::Box, vec::Vec};

use core::any::Any;

/// An object a rendered fragment needs kept alive, typically an
/// `Arc<EventAdapter>`.
pub type StrongReference = Box<dyn Any + Send + Sync>;

type UpdateFn<State> = Box<dyn Fn(&State) + Send + Sync>;

/// A built fragment paired with the function that re-syncs it to a State.
///
/// `strong_references` live exactly as long as the element does. When the
/// driver replaces its current element after a rebuild, the old element is
/// dropped and with it every adapter its controls were wired to.
pub struct RenderedElement<Element, State> {
    pub element: Element,
    pub strong_references: Vec<StrongReference>,
    update: UpdateFn<State>,
}

impl<Element, State> RenderedElement<Element, State> {
    pub fn new<F>(element: Element, strong_references: Vec<StrongReference>, update: F) -> Self
    where
        F: Fn(&State) + Send + Sync + 'static,
    {
        Self {
            element,
            strong_references,
            update: Box::new(update),
        }
    }

    /// An element with no references and nothing to re-sync.
    pub fn constant(element: Element) -> Self
    where
        State: 'static,
    {
        Self::new(element, Vec::new(), |_: &State| {})
    }

    /// Re-apply `state` to the fragment's displayed values.
    pub fn update(&self, state: &State) {
        (self.update)(state);
    }

    /// Transform the fragment, keeping references and update function.
    pub fn map<Mapped>(self, f: impl FnOnce(Element) -> Mapped) -> RenderedElement<Mapped, State> {
        RenderedElement {
            element: f(self.element),
            strong_references: self.strong_references,
            update: self.update,
        }
    }

    /// Merge several elements into one whose update runs every child's update
    /// in order and whose references are the union of the children's.
    pub fn collect<I>(elements: I) -> RenderedElement<Vec<Element>, State>
    where
        I: IntoIterator<Item = RenderedElement<Element, State>>,
        State: 'static,
    {
        let mut fragments = Vec::new();
        let mut strong_references = Vec::new();
        let mut updates: Vec<UpdateFn<State>> = Vec::new();

        for rendered in elements {
            fragments.push(rendered.element);
            strong_references.extend(rendered.strong_references);
            updates.push(rendered.update);
        }

        RenderedElement::new(fragments, strong_references, move |state: &State| {
            for update in &updates {
                update(state);
            }
        })
    }
}

impl<Element: core::fmt::Debug, State> core::fmt::Debug for RenderedElement<Element, State> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderedElement")
            .field("element", &self.element)
            .field("strong_references", &self.strong_references.len())
            .finish_non_exhaustive()
    }
}

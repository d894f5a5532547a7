//! Field renderers: one control bound to one field of State.
//!
//! Each renderer builds its control from the context's snapshot, wires the
//! control's commit events into [`RenderingContext::change`], and returns an
//! update function for every later State. Renderers never look at the context's
//! state again after construction; it goes stale after the first change.

#[cfg(feature = "no_std")]
use alloc::{boxed::Box, string::String, vec, vec::Vec};

use crate::{
    ControlEvent, EventAdapter, FieldAccessor, RenderedElement, RenderingContext, StrongReference,
    Switch, TextField, View,
};

/// Bind a `bool` field to a toggle.
///
/// A `ValueChanged` event writes the toggle's current value into the field.
pub fn ui_switch<State>(
    context: &RenderingContext<State>,
    accessor: FieldAccessor<State, bool>,
) -> RenderedElement<View, State>
where
    State: Clone + Send + Sync + 'static,
{
    let toggle = Switch::new();
    toggle.set_on(accessor.get(context.state()));

    let value_changed = EventAdapter::new({
        let context = context.clone();
        let toggle = toggle.clone();
        move || {
            let on = toggle.is_on();
            if let Err(err) = context.change(|state| accessor.set(state, on)) {
                tracing::warn!(%err, "switch value not committed");
            }
        }
    });
    toggle.add_target(&value_changed, ControlEvent::ValueChanged);

    let strong_references: Vec<StrongReference> = vec![Box::new(value_changed)];
    let view = View::Switch(toggle.clone());
    RenderedElement::new(view, strong_references, move |state: &State| {
        toggle.set_on(accessor.get(state));
    })
}

/// Bind a `String` field to a text input.
///
/// Both `EditingDidEnd` and `EditingDidEndOnExit` commit the field's text; the
/// latter also asks the host to pop the current screen once the commit's
/// rebuild has finished.
pub fn text_field<State>(
    context: &RenderingContext<State>,
    accessor: FieldAccessor<State, String>,
) -> RenderedElement<View, State>
where
    State: Clone + Send + Sync + 'static,
{
    let input = TextField::new();
    input.set_text(accessor.get(context.state()));

    let did_end = EventAdapter::new({
        let context = context.clone();
        let input = input.clone();
        move || commit_text(&context, accessor, input.text())
    });
    let did_exit = EventAdapter::new({
        let context = context.clone();
        let input = input.clone();
        move || {
            commit_text(&context, accessor, input.text());
            context.pop_view_controller();
        }
    });
    input.add_target(&did_end, ControlEvent::EditingDidEnd);
    input.add_target(&did_exit, ControlEvent::EditingDidEndOnExit);

    let strong_references: Vec<StrongReference> = vec![Box::new(did_end), Box::new(did_exit)];
    let view = View::TextField(input.clone());
    RenderedElement::new(view, strong_references, move |state: &State| {
        input.set_text(accessor.get(state));
    })
}

fn commit_text<State>(context: &RenderingContext<State>, accessor: FieldAccessor<State, String>, text: String)
where
    State: Clone + Send + Sync + 'static,
{
    if let Err(err) = context.change(|state| accessor.set(state, text)) {
        tracing::warn!(%err, "text field value not committed");
    }
}

//! The form driver that owns State and runs the rebuild cycle.

#[cfg(feature = "no_std")]
use alloc::{boxed::Box, string::String, vec::Vec};

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use portable_atomic_util::Arc;
use spin::Mutex;

use crate::navigation::{NavigationQueue, Navigator, Presentable};
use crate::{
    FormError, FormTable, IndexPath, ListHost, RenderedElement, RenderingContext, Section, View,
};

/// Builds a form's sections from a [`RenderingContext`].
///
/// Must be a pure function of `context.state()`: the driver calls it again from
/// scratch after every change and relies on equal States producing equal forms.
///
/// Closures with the matching signature implement this trait via the blanket
/// implementation.
pub trait FormBuild<State> {
    fn build(&self, context: &RenderingContext<State>) -> RenderedElement<Vec<Section>, State>;
}

impl<State, F> FormBuild<State> for F
where
    F: Fn(&RenderingContext<State>) -> RenderedElement<Vec<Section>, State>,
{
    fn build(&self, context: &RenderingContext<State>) -> RenderedElement<Vec<Section>, State> {
        self(context)
    }
}

/// Presentation settings for a [`FormDriver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
    /// Title shown by the navigation stack.
    pub title: String,
    /// Push footer titles to the host after every reload. On by default.
    pub refresh_footers: bool,
}

impl FormOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            refresh_footers: true,
        }
    }

    pub fn with_refresh_footers(mut self, refresh_footers: bool) -> Self {
        self.refresh_footers = refresh_footers;
        self
    }
}

/// Shared state behind a [`FormDriver`] and every context it hands out.
pub(crate) struct DriverCore<State> {
    state: Mutex<State>,
    build: Box<dyn FormBuild<State> + Send + Sync>,
    rendered: Mutex<Option<RenderedElement<Vec<Section>, State>>>,
    table: Mutex<FormTable>,
    host: Mutex<Box<dyn ListHost + Send>>,
    navigator: Navigator,
    options: FormOptions,
    rebuilding: AtomicBool,
    generation: AtomicUsize,
    first_responder: Mutex<Option<View>>,
}

/// Holds the rebuilding flag for the duration of one change, including when
/// the mutator or the build function panics.
struct RebuildGuard<'a>(&'a AtomicBool);

impl<'a> RebuildGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for RebuildGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<State> DriverCore<State>
where
    State: Clone + Send + Sync + 'static,
{
    /// Build and sync a fresh element for `state`.
    fn render(this: &Arc<Self>, state: State) -> RenderedElement<Vec<Section>, State> {
        let context = RenderingContext::new(state.clone(), Arc::downgrade(this), this.navigator.clone());
        let rendered = this.build.build(&context);
        rendered.update(&state);
        rendered
    }

    /// Apply `mutator`, rebuild, and push the result to the host.
    pub(crate) fn change<F>(this: &Arc<Self>, mutator: F) -> Result<(), FormError>
    where
        F: FnOnce(&mut State),
    {
        let _guard = RebuildGuard::acquire(&this.rebuilding).ok_or(FormError::ReentrantChange)?;

        let state = {
            let mut state = this.state.lock();
            mutator(&mut state);
            state.clone()
        };

        let rendered = Self::render(this, state);
        let sections = rendered.element.clone();
        let generation = this.generation.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(
            title = %this.options.title,
            generation,
            sections = sections.len(),
            "form rebuilt"
        );

        let superseded = this.rendered.lock().replace(rendered);

        {
            let mut table = this.table.lock();
            table.replace_sections(sections);

            let mut host = this.host.lock();
            host.reload_data(&table);
            if this.options.refresh_footers {
                reload_section_footers(&mut **host, &table);
            }
        }

        // Releases the previous controls' adapters.
        drop(superseded);
        Ok(())
    }
}

/// Rewrite every displayed footer in place, without animation.
fn reload_section_footers(host: &mut dyn ListHost, table: &FormTable) {
    host.set_animations_enabled(false);
    host.begin_updates();
    for section in 0..table.number_of_sections() {
        host.set_footer_text(section, table.footer_title(section).map(String::from));
    }
    host.end_updates();
    host.set_animations_enabled(true);
}

/// Owns a form's State and keeps its displayed sections in sync with it.
///
/// Every successful [`change`](Self::change), whether issued here or through a
/// [`RenderingContext`] captured by a control, mutates State in place and then
/// rebuilds the whole form:
///
/// 1. a new [`RenderingContext`] is created from the post-change State,
/// 2. the build function produces a brand-new [`RenderedElement`],
/// 3. its `update` is run with the same State,
/// 4. it replaces the previous element, whose adapters are released,
/// 5. the host reloads its rows from the new [`FormTable`],
/// 6. the host's footers are rewritten with animations disabled.
///
/// There is no diffing: controls from an earlier build are discarded and stop
/// reacting to events.
///
/// # Example
///
/// ```rust
/// use oxide_forms::{
///     control_cell, field, section, sections, text_field, ui_switch, FormDriver, FormOptions,
///     IndexPath, RenderingContext, TestListHost,
/// };
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Settings { enabled: bool, name: String }
///
/// fn build(context: &RenderingContext<Settings>) -> oxide_forms::RenderedElement<Vec<oxide_forms::Section>, Settings> {
///     let footer = if context.state().enabled { "On" } else { "Off" };
///     sections([section(
///         [
///             control_cell("Enabled", ui_switch(context, field!(Settings, enabled))),
///             control_cell("Name", text_field(context, field!(Settings, name))),
///         ],
///         Some(footer.to_string()),
///     )])
/// }
///
/// let host = TestListHost::new();
/// let driver = FormDriver::new(
///     Settings { enabled: false, name: "x".to_string() },
///     FormOptions::new("Settings"),
///     build,
///     host.boxed(),
/// );
///
/// let switch = driver.with_table(|table| {
///     table.cell(IndexPath::new(0, 0)).unwrap().accessory().unwrap().as_switch().unwrap().clone()
/// });
/// switch.toggle_to(true);
///
/// assert!(driver.state().enabled);
/// assert_eq!(driver.with_table(|table| table.footer_title(0).map(String::from)), Some("On".to_string()));
/// ```
pub struct FormDriver<State> {
    core: Arc<DriverCore<State>>,
}

impl<State> FormDriver<State>
where
    State: Clone + Send + Sync + 'static,
{
    /// Create a driver on its own navigation stack and render `initial` once.
    ///
    /// The host receives the first rows through one `reload_data` call before
    /// this returns.
    pub fn new<B>(initial: State, options: FormOptions, build: B, host: Box<dyn ListHost + Send>) -> Self
    where
        B: FormBuild<State> + Send + Sync + 'static,
    {
        Self::with_navigator(initial, options, build, host, Navigator::new())
    }

    /// Create a driver that reports to an existing navigation stack.
    pub(crate) fn with_navigator<B>(
        initial: State,
        options: FormOptions,
        build: B,
        host: Box<dyn ListHost + Send>,
        navigator: Navigator,
    ) -> Self
    where
        B: FormBuild<State> + Send + Sync + 'static,
    {
        let core = Arc::new(DriverCore {
            state: Mutex::new(initial.clone()),
            build: Box::new(build),
            rendered: Mutex::new(None),
            table: Mutex::new(FormTable::default()),
            host: Mutex::new(host),
            navigator,
            options,
            rebuilding: AtomicBool::new(false),
            generation: AtomicUsize::new(0),
            first_responder: Mutex::new(None),
        });

        let rendered = DriverCore::render(&core, initial);
        tracing::debug!(
            title = %core.options.title,
            sections = rendered.element.len(),
            "form rendered"
        );
        {
            let mut table = core.table.lock();
            table.replace_sections(rendered.element.clone());
            core.host.lock().reload_data(&table);
        }
        *core.rendered.lock() = Some(rendered);

        FormDriver { core }
    }

    /// A copy of the authoritative State.
    pub fn state(&self) -> State {
        self.core.state.lock().clone()
    }

    /// A context over the current State, bound to this driver.
    pub fn context(&self) -> RenderingContext<State> {
        RenderingContext::new(self.state(), Arc::downgrade(&self.core), self.core.navigator.clone())
    }

    /// Mutate State and rebuild; see [`RenderingContext::change`].
    pub fn change<F>(&self, mutator: F) -> Result<(), FormError>
    where
        F: FnOnce(&mut State),
    {
        DriverCore::change(&self.core, mutator)
    }

    /// Dispatch a tap on `index_path` to the cell's selection callback.
    ///
    /// The table is not locked while the callback runs, so it may change the
    /// form.
    pub fn select_row(&self, index_path: IndexPath) -> Result<(), FormError> {
        let cell = self
            .core
            .table
            .lock()
            .cell(index_path)
            .cloned()
            .ok_or(FormError::RowOutOfRange {
                section: index_path.section,
                row: index_path.row,
            })?;
        tracing::trace!(?index_path, title = cell.title(), "row selected");
        cell.select();
        Ok(())
    }

    /// Read the current table.
    ///
    /// Must not be called from a mutator or from the host.
    pub fn with_table<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&FormTable) -> R,
    {
        let table = self.core.table.lock();
        f(&table)
    }

    /// Receiving end of the navigation stack this form reports to. Forms
    /// pushed with [`RenderingContext::push_form`] share it.
    pub fn navigation(&self) -> NavigationQueue {
        self.core.navigator.queue()
    }

    pub fn options(&self) -> &FormOptions {
        &self.core.options
    }

    /// Number of rebuilds since construction.
    pub fn generation(&self) -> usize {
        self.core.generation.load(Ordering::Relaxed)
    }

    /// Control to focus once the form is on screen.
    pub fn set_first_responder(&self, view: View) {
        *self.core.first_responder.lock() = Some(view);
    }

    /// Called by the host after the form appeared. Focuses the registered
    /// first responder and reports whether it accepted focus.
    pub fn did_appear(&self) -> bool {
        let responder = self.core.first_responder.lock().clone();
        responder.is_some_and(|view| view.become_first_responder())
    }
}

impl<State> Presentable for FormDriver<State>
where
    State: Clone + Send + Sync + 'static,
{
    fn title(&self) -> &str {
        &self.core.options.title
    }

    fn visit_table(&self, visit: &mut dyn FnMut(&FormTable)) {
        self.with_table(|table| visit(table));
    }

    fn select_row(&self, index_path: IndexPath) -> Result<(), FormError> {
        FormDriver::select_row(self, index_path)
    }

    fn did_appear(&self) -> bool {
        FormDriver::did_appear(self)
    }
}

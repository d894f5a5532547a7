//! The per-rebuild view of the driver handed to build functions.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use portable_atomic_util::Weak;

use crate::driver::DriverCore;
use crate::navigation::{NavigationRequest, Navigator, Presentable};
use crate::{FormBuild, FormDriver, FormError, FormOptions, ListHost};

/// A snapshot of State plus handles back into the owning driver.
///
/// A fresh context is created for every rebuild, so [`state`](Self::state) is
/// only current during the build it was created for. Anything that needs later
/// values must get them from the `update` function of its
/// [`RenderedElement`](crate::RenderedElement).
///
/// [`change`](Self::change) and the navigation methods stay usable for as long
/// as the driver lives; capture a clone of the context in event callbacks.
pub struct RenderingContext<State> {
    state: State,
    driver: Weak<DriverCore<State>>,
    navigator: Navigator,
}

impl<State: Clone> Clone for RenderingContext<State> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            driver: self.driver.clone(),
            navigator: self.navigator.clone(),
        }
    }
}

impl<State> RenderingContext<State> {
    pub(crate) fn new(state: State, driver: Weak<DriverCore<State>>, navigator: Navigator) -> Self {
        Self {
            state,
            driver,
            navigator,
        }
    }

    /// State as of the rebuild that created this context.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Request navigation to `screen`. Does not wait for the host.
    pub fn push_view_controller<P>(&self, screen: P)
    where
        P: Presentable + Send + 'static,
    {
        self.navigator.request(NavigationRequest::Push(Box::new(screen)));
    }

    /// Create a nested form on this form's navigation stack and request that
    /// the host push it.
    ///
    /// The nested form's own navigation requests, such as the pop issued by a
    /// submitted [`text_field`](crate::text_field), arrive on the same
    /// [`NavigationQueue`](crate::NavigationQueue) as this form's.
    pub fn push_form<Child, B>(
        &self,
        initial: Child,
        options: FormOptions,
        build: B,
        host: Box<dyn ListHost + Send>,
    ) where
        Child: Clone + Send + Sync + 'static,
        B: FormBuild<Child> + Send + Sync + 'static,
    {
        let form = FormDriver::with_navigator(initial, options, build, host, self.navigator.clone());
        self.push_view_controller(form);
    }

    /// Request the host to pop the current screen. Does not wait for the host.
    pub fn pop_view_controller(&self) {
        self.navigator.request(NavigationRequest::Pop);
    }
}

impl<State> RenderingContext<State>
where
    State: Clone + Send + Sync + 'static,
{
    /// Mutate the driver's State in place, then rebuild the whole form before
    /// returning.
    ///
    /// `mutator` runs while the driver's State is locked; it must not call
    /// back into the driver. A `change` issued while another one is still
    /// rebuilding is rejected with [`FormError::ReentrantChange`].
    pub fn change<F>(&self, mutator: F) -> Result<(), FormError>
    where
        F: FnOnce(&mut State),
    {
        let driver = self.driver.upgrade().ok_or(FormError::DriverReleased)?;
        DriverCore::change(&driver, mutator)
    }
}

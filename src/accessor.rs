//! Bidirectional accessors addressing a single field of a State value.

/// A read/write path into one field of `State`.
///
/// Built from two plain function pointers, so an accessor is `Copy` and can be
/// captured by any number of event callbacks without allocation. Prefer the
/// [`field!`](crate::field) macro, which derives both halves from a field path
/// and therefore cannot target a field that does not exist.
///
/// Implementations are expected to obey the lens law: reading immediately after
/// `set(state, v)` yields `v`, and no other field of `state` changes.
///
/// # Example
///
/// ```rust
/// use oxide_forms::{field, FieldAccessor};
///
/// #[derive(Clone)]
/// struct Settings { enabled: bool, name: String }
///
/// let enabled: FieldAccessor<Settings, bool> = field!(Settings, enabled);
///
/// let mut settings = Settings { enabled: false, name: "x".to_string() };
/// enabled.set(&mut settings, true);
/// assert!(enabled.get(&settings));
/// ```
pub struct FieldAccessor<State, T> {
    get: fn(&State) -> T,
    set: fn(&mut State, T),
}

impl<State, T> Clone for FieldAccessor<State, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<State, T> Copy for FieldAccessor<State, T> {}

impl<State, T> core::fmt::Debug for FieldAccessor<State, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldAccessor").finish_non_exhaustive()
    }
}

impl<State, T> FieldAccessor<State, T> {
    /// Create an accessor from a getter and a setter.
    ///
    /// Non-capturing closures coerce to the function pointers expected here.
    pub const fn new(get: fn(&State) -> T, set: fn(&mut State, T)) -> Self {
        Self { get, set }
    }

    /// Read the addressed field.
    pub fn get(&self, state: &State) -> T {
        (self.get)(state)
    }

    /// Overwrite the addressed field in place.
    pub fn set(&self, state: &mut State, value: T) {
        (self.set)(state, value)
    }
}

/// Build a [`FieldAccessor`] for a (possibly nested) field path.
///
/// The getter clones the field, so `T` must be `Clone`.
///
/// ```rust
/// use oxide_forms::field;
///
/// #[derive(Clone)]
/// struct Profile { name: String }
/// #[derive(Clone)]
/// struct Account { profile: Profile }
///
/// let name = field!(Account, profile.name);
/// let mut account = Account { profile: Profile { name: "a".into() } };
/// name.set(&mut account, "b".into());
/// assert_eq!(account.profile.name, "b");
/// ```
#[macro_export]
macro_rules! field {
    ($state:ty, $($path:ident).+) => {
        $crate::FieldAccessor::new(
            |state: &$state| ::core::clone::Clone::clone(&state.$($path).+),
            |state: &mut $state, value| state.$($path).+ = value,
        )
    };
}

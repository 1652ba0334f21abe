use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use super::storage::{LocalStorage, PreferenceStore};
use super::system::{MediaQuery, SystemPreference};
use super::ColorMode;
use crate::config;

type Listener = Rc<dyn Fn(ColorMode)>;

struct Inner {
    mode: Option<ColorMode>,
    store: Box<dyn PreferenceStore>,
    system: Box<dyn SystemPreference>,
    listeners: Vec<(usize, Listener)>,
    next_listener: usize,
}

/// Owner of the page's color mode.
///
/// Cheap to clone: clones are handles onto the same state, which is how the
/// provider hands it to callbacks. Every read and write goes through the
/// methods here; there is no global.
#[derive(Clone)]
pub struct ThemeController {
    inner: Rc<RefCell<Inner>>,
}

impl PartialEq for ThemeController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ThemeController {
    pub fn new(store: impl PreferenceStore + 'static, system: impl SystemPreference + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                mode: None,
                store: Box::new(store),
                system: Box::new(system),
                listeners: Vec::new(),
                next_listener: 0,
            })),
        }
    }

    /// Controller backed by `localStorage` and the `prefers-color-scheme` media query.
    pub fn browser() -> Self {
        Self::new(
            LocalStorage::new(config::THEME_STORAGE_KEY),
            MediaQuery::new(config::PREFERS_DARK_QUERY),
        )
    }

    /// Resolves the starting mode: stored value, then system preference, then the default.
    /// Only the first call does any work.
    pub fn initialize(&self) -> ColorMode {
        if let Some(mode) = self.inner.borrow().mode {
            return mode;
        }

        let mode = self.resolve_initial();
        self.inner.borrow_mut().mode = Some(mode);
        info!("Color mode initialized to {}", mode);
        self.notify(mode);
        mode
    }

    fn resolve_initial(&self) -> ColorMode {
        let inner = self.inner.borrow();

        match inner.store.load() {
            Ok(Some(stored)) => match stored.parse::<ColorMode>() {
                Ok(mode) => {
                    debug!("Using stored color mode {}", mode);
                    return mode;
                }
                Err(err) => warn!("Ignoring stored theme preference: {}", err),
            },
            Ok(None) => debug!("No stored color mode"),
            Err(err) => warn!("Could not read theme preference: {}", err),
        }

        match inner.system.prefers_dark() {
            Some(prefers_dark) => {
                debug!("System prefers dark: {}", prefers_dark);
                ColorMode::from_prefers_dark(prefers_dark)
            }
            None => config::DEFAULT_MODE,
        }
    }

    #[cfg(test)]
    pub fn is_initialized(&self) -> bool {
        self.inner.borrow().mode.is_some()
    }

    /// The active mode. Before `initialize` this is the default mode.
    pub fn current_mode(&self) -> ColorMode {
        self.inner.borrow().mode.unwrap_or(config::DEFAULT_MODE)
    }

    /// Flips the mode and persists it. A failed write only costs persistence;
    /// the in-memory mode still changes.
    pub fn toggle(&self) {
        let mode = self.current_mode().toggled();
        {
            let mut inner = self.inner.borrow_mut();
            inner.mode = Some(mode);
            if let Err(err) = inner.store.save(mode) {
                warn!("Theme preference not saved: {}", err);
            }
        }
        info!("Color mode toggled to {}", mode);
        self.notify(mode);
    }

    /// Registers `listener` for mode changes. It stays registered until the
    /// returned `Subscription` is dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl Fn(ColorMode) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    fn notify(&self, mode: ColorMode) {
        // Listeners may call back into the controller, so don't hold the borrow.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(mode);
        }
    }
}

pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::theme::fakes::{Fixed, MemoryStore};

    const KEY: &str = "theme-preference";

    fn controller(store: &MemoryStore, prefers_dark: Option<bool>) -> ThemeController {
        ThemeController::new(store.clone(), Fixed(prefers_dark))
    }

    #[test]
    fn stored_value_wins_over_system_preference() {
        for (stored, system) in [("light", Some(true)), ("dark", Some(false)), ("light", None)] {
            let store = MemoryStore::with_value(KEY, stored);
            let theme = controller(&store, system);
            theme.initialize();
            assert_eq!(theme.current_mode().as_str(), stored);
        }
    }

    #[test]
    fn falls_back_to_system_preference() {
        let theme = controller(&MemoryStore::new(KEY), Some(true));
        assert_eq!(theme.initialize(), ColorMode::Dark);

        let theme = controller(&MemoryStore::new(KEY), Some(false));
        assert_eq!(theme.initialize(), ColorMode::Light);
    }

    #[test]
    fn defaults_to_dark_without_any_signal() {
        let theme = controller(&MemoryStore::new(KEY), None);
        assert_eq!(theme.initialize(), ColorMode::Dark);
    }

    #[test]
    fn garbage_in_storage_is_treated_as_absent() {
        let store = MemoryStore::with_value(KEY, "purple");
        let theme = controller(&store, Some(false));
        assert_eq!(theme.initialize(), ColorMode::Light);
    }

    #[test]
    fn initialize_does_not_persist_anything() {
        let store = MemoryStore::new(KEY);
        controller(&store, Some(false)).initialize();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn initialize_runs_once() {
        let store = MemoryStore::new(KEY);
        let theme = controller(&store, Some(false));
        assert!(!theme.is_initialized());
        theme.initialize();
        theme.toggle();
        assert_eq!(theme.initialize(), ColorMode::Dark);
        assert!(theme.is_initialized());
    }

    #[test]
    fn toggle_parity_from_dark() {
        let theme = controller(&MemoryStore::new(KEY), None);
        theme.initialize();
        for n in 1..=7 {
            theme.toggle();
            let expected = if n % 2 == 0 { ColorMode::Dark } else { ColorMode::Light };
            assert_eq!(theme.current_mode(), expected, "after {} toggles", n);
        }
    }

    #[test]
    fn two_toggles_return_to_dark_and_persist_dark() {
        let store = MemoryStore::new(KEY);
        let theme = controller(&store, None);
        theme.initialize();

        theme.toggle();
        assert_eq!(store.get().as_deref(), Some("light"));
        theme.toggle();

        assert_eq!(theme.current_mode(), ColorMode::Dark);
        assert_eq!(store.get().as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_survives_failed_write() {
        let store = MemoryStore::with_value(KEY, "dark").read_only();
        let theme = controller(&store, None);
        theme.initialize();
        theme.toggle();
        assert_eq!(theme.current_mode(), ColorMode::Light);
        assert_eq!(store.get().as_deref(), Some("dark"));
    }

    #[test]
    fn subscribers_see_changes_until_dropped() {
        let theme = controller(&MemoryStore::new(KEY), None);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let subscription = {
            let seen = seen.clone();
            theme.subscribe(move |mode| seen.borrow_mut().push(mode))
        };
        theme.initialize();
        theme.toggle();
        drop(subscription);
        theme.toggle();

        assert_eq!(*seen.borrow(), vec![ColorMode::Dark, ColorMode::Light]);
    }

    #[test]
    fn listener_can_read_controller() {
        let theme = controller(&MemoryStore::new(KEY), None);
        let observed = Rc::new(Cell::new(None));
        let _subscription = {
            let observed = observed.clone();
            let handle = theme.clone();
            theme.subscribe(move |_| observed.set(Some(handle.current_mode())))
        };
        theme.toggle();
        assert_eq!(observed.get(), Some(ColorMode::Light));
    }

    #[test]
    fn subscription_outliving_controller_is_harmless() {
        let theme = controller(&MemoryStore::new(KEY), None);
        let subscription = theme.subscribe(|_| {});
        drop(theme);
        drop(subscription);
    }

    #[test]
    fn clones_are_equal_handles() {
        let theme = controller(&MemoryStore::new(KEY), None);
        let other = controller(&MemoryStore::new(KEY), None);
        assert!(theme == theme.clone());
        assert!(theme != other);
    }
}

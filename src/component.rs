//! Lifecycle contract for hosted components.
//!
//! A host (a registry, a scheduler, a main loop) keeps components that each
//! own one or more machines and drive them from their lifecycle hooks. How
//! components are registered and identified is up to the host; this module
//! only fixes the calls a component receives and when it receives them.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A stateful unit driven by a host.
///
/// All hooks take no arguments and must not block.
pub trait Component {
    /// Name for display and logging.
    fn name(&self) -> &str;

    /// Called once when the component is opened.
    fn on_open(&mut self) {}

    /// Called once per host update while the component is open.
    fn on_running(&mut self) {}

    /// Called once when the component is closed.
    fn on_close(&mut self) {}
}

/// Summary of a hosted component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub is_open: bool,
}

/// A component together with its open/closed flag.
///
/// `Hosted` is what turns a host's requests into lifecycle calls:
/// `on_open` fires once per open transition, `on_close` once per close
/// transition, and `on_running` on every [`Hosted::update`] while open.
/// Dropping an open component closes it.
///
/// # Example
///
/// ```rust
/// use tickfsm::component::{Component, Hosted};
///
/// struct Blinker {
///     opened: usize,
/// }
///
/// impl Component for Blinker {
///     fn name(&self) -> &str {
///         "Blinker"
///     }
///
///     fn on_open(&mut self) {
///         self.opened += 1;
///     }
/// }
///
/// let mut hosted = Hosted::new(Blinker { opened: 0 });
/// assert!(hosted.open());
/// assert!(!hosted.open());
/// assert_eq!(hosted.component().opened, 1);
/// ```
pub struct Hosted<C: Component> {
    component: C,
    is_open: bool,
}

impl<C: Component> Hosted<C> {
    /// Wrap a component in the closed state.
    pub fn new(component: C) -> Self {
        Self {
            component,
            is_open: false,
        }
    }

    /// Open the component. Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        debug!(component = self.component.name(), "opening component");
        self.component.on_open();
        self.is_open = true;
        true
    }

    /// Close the component. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        debug!(component = self.component.name(), "closing component");
        self.component.on_close();
        self.is_open = false;
        true
    }

    /// One host update cycle. Returns whether the component ran.
    pub fn update(&mut self) -> bool {
        if self.is_open {
            self.component.on_running();
        }
        self.is_open
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn info(&self) -> AppInfo {
        AppInfo {
            name: self.component.name().to_string(),
            is_open: self.is_open,
        }
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }
}

impl<C: Component> Drop for Hosted<C> {
    fn drop(&mut self) {
        self.close();
    }
}

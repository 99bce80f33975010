//! States of a polling state machine.
//!
//! A state is a named node carrying optional side-effect hooks. States hold
//! no references to other states or edges; the engine addresses them through
//! [`StateId`] handles into its arena.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side-effect callback fired by the engine.
///
/// Hooks run synchronously, in-line, on the caller's execution context.
/// They are expected to be non-failing and must not block.
pub type Hook = Box<dyn FnMut()>;

/// Handle to a state inside one engine's (or builder's) arena.
///
/// Handles are sequential indices assigned as states are added. They are only
/// meaningful for the arena that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named node of the state graph.
///
/// All hooks are optional; an absent hook is a no-op.
///
/// # Example
///
/// ```rust
/// use tickfsm::core::State;
///
/// let idle = State::new("Idle").with_on_enter(|| println!("idle"));
/// let done = State::new("Done").with_final(true);
///
/// assert_eq!(idle.name(), "Idle");
/// assert!(!idle.is_final());
/// assert!(done.is_final());
/// ```
#[derive(Default)]
pub struct State {
    name: String,
    is_final: bool,
    on_enter: Option<Hook>,
    on_tick: Option<Hook>,
    on_exit: Option<Hook>,
}

impl State {
    /// Create a non-terminal state with no hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Overwrite the whole configuration of this state.
    pub fn setup(
        &mut self,
        name: impl Into<String>,
        on_enter: Option<Hook>,
        on_tick: Option<Hook>,
        on_exit: Option<Hook>,
        is_final: bool,
    ) {
        self.name = name.into();
        self.on_enter = on_enter;
        self.on_tick = on_tick;
        self.on_exit = on_exit;
        self.is_final = is_final;
    }

    pub fn with_on_enter<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.set_on_enter(f);
        self
    }

    pub fn with_on_tick<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.set_on_tick(f);
        self
    }

    pub fn with_on_exit<F: FnMut() + 'static>(mut self, f: F) -> Self {
        self.set_on_exit(f);
        self
    }

    /// Mark the state as terminal (or not).
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Check if entering this state finishes the machine.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn set_final(&mut self, is_final: bool) {
        self.is_final = is_final;
    }

    /// Hook fired when the state is entered.
    pub fn set_on_enter<F: FnMut() + 'static>(&mut self, f: F) {
        self.on_enter = Some(Box::new(f));
    }

    /// Hook fired on every effective poll spent in this state.
    pub fn set_on_tick<F: FnMut() + 'static>(&mut self, f: F) {
        self.on_tick = Some(Box::new(f));
    }

    /// Hook fired when a transition leaves this state.
    pub fn set_on_exit<F: FnMut() + 'static>(&mut self, f: F) {
        self.on_exit = Some(Box::new(f));
    }

    /// Remove all three hooks.
    pub fn clear_hooks(&mut self) {
        self.on_enter = None;
        self.on_tick = None;
        self.on_exit = None;
    }

    pub(crate) fn enter(&mut self) {
        if let Some(hook) = self.on_enter.as_mut() {
            hook();
        }
    }

    pub(crate) fn tick(&mut self) {
        if let Some(hook) = self.on_tick.as_mut() {
            hook();
        }
    }

    pub(crate) fn exit(&mut self) {
        if let Some(hook) = self.on_exit.as_mut() {
            hook();
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("is_final", &self.is_final)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_tick", &self.on_tick.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}

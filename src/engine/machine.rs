//! Polling state machine engine.

use crate::core::{
    Clock, EdgeId, EventId, Hook, MonotonicClock, State, StateId, TimedTransition, Transition,
};
use std::fmt;
use tracing::{debug, trace, warn};

/// Timed edge plus the engine-owned start of its timer.
///
/// The start is only meaningful while the machine sits in the edge's source
/// state; every state change clears it.
struct TimedSlot {
    edge: TimedTransition,
    started_at: Option<u64>,
}

#[derive(Clone, Copy)]
enum EdgeRef {
    Event(usize),
    Timed(usize),
}

/// State machine driven by events and by polling.
///
/// The machine owns its state arena and both edge lists. It does nothing on
/// its own: [`Machine::trigger`] and [`Machine::run`] are the only entry
/// points that move it, and all hooks fire synchronously inside those calls.
///
/// The initial state is entered lazily, by the first `trigger` or `run`
/// after construction or [`Machine::reset`].
///
/// Hooks must not call back into the machine that invoked them.
///
/// # Example
///
/// ```rust
/// use tickfsm::core::{State, Transition};
/// use tickfsm::engine::Machine;
///
/// let mut machine = Machine::new();
/// let idle = machine.add_state(State::new("Idle"));
/// let active = machine.add_state(State::new("Active").with_final(true));
/// machine.add_transition(Transition::new(idle, active, 1));
/// machine.set_initial_state(idle);
///
/// assert_eq!(machine.state(), None);
/// assert!(machine.trigger(1));
/// assert!(machine.is_in_state(active));
/// assert!(machine.is_finished());
/// assert!(!machine.trigger(1));
/// ```
pub struct Machine<C: Clock = MonotonicClock> {
    clock: C,
    states: Vec<State>,
    transitions: Vec<Transition>,
    timed: Vec<TimedSlot>,
    next_edge: usize,
    initial: Option<StateId>,
    current: Option<StateId>,
    previous: Option<StateId>,
    initialized: bool,
    finished: bool,
    last_run: u64,
    last_transition: Option<u64>,
    on_transition: Option<Hook>,
    on_finished: Option<Hook>,
}

impl Machine<MonotonicClock> {
    /// Create an empty machine on the real-time clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl<C: Clock + Default> Default for Machine<C> {
    fn default() -> Self {
        Self::with_clock(C::default())
    }
}

impl<C: Clock> Machine<C> {
    /// Create an empty machine reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            states: Vec::new(),
            transitions: Vec::new(),
            timed: Vec::new(),
            next_edge: 0,
            initial: None,
            current: None,
            previous: None,
            initialized: false,
            finished: false,
            last_run: 0,
            last_transition: None,
            on_transition: None,
            on_finished: None,
        }
    }

    /// Add a state to the arena and return its handle.
    pub fn add_state(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    pub fn state_ref(&self, id: StateId) -> Option<&State> {
        self.states.get(id.0)
    }

    /// Mutable access for reassigning a state's name, hooks or final flag.
    pub fn state_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.states.get_mut(id.0)
    }

    pub fn state_name(&self, id: StateId) -> Option<&str> {
        self.state_ref(id).map(State::name)
    }

    /// All states in arena order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(index, state)| (StateId(index), state))
    }

    /// State to enter on activation.
    ///
    /// A running machine keeps its current state; the new initial state is
    /// entered after the next [`Machine::reset`].
    pub fn set_initial_state(&mut self, id: StateId) {
        self.initial = Some(id);
    }

    pub fn initial_state(&self) -> Option<StateId> {
        self.initial
    }

    /// Hook fired on every transition, after the edge's own action and
    /// before the destination is entered.
    pub fn set_on_transition<F: FnMut() + 'static>(&mut self, f: F) {
        self.on_transition = Some(Box::new(f));
    }

    /// Hook fired when a final state is entered.
    pub fn set_on_finished<F: FnMut() + 'static>(&mut self, f: F) {
        self.on_finished = Some(Box::new(f));
    }

    /// Append an event edge. Earlier edges win ties.
    pub fn add_transition(&mut self, mut transition: Transition) -> EdgeId {
        let id = self.allocate_edge_id();
        transition.id = Some(id);
        self.transitions.push(transition);
        id
    }

    pub fn add_transitions<I>(&mut self, transitions: I) -> Vec<EdgeId>
    where
        I: IntoIterator<Item = Transition>,
    {
        transitions
            .into_iter()
            .map(|transition| self.add_transition(transition))
            .collect()
    }

    /// Append a timed edge. Timed edges are scanned in insertion order.
    pub fn add_timed_transition(&mut self, mut transition: TimedTransition) -> EdgeId {
        let id = self.allocate_edge_id();
        transition.id = Some(id);
        self.timed.push(TimedSlot {
            edge: transition,
            started_at: None,
        });
        id
    }

    pub fn add_timed_transitions<I>(&mut self, transitions: I) -> Vec<EdgeId>
    where
        I: IntoIterator<Item = TimedTransition>,
    {
        transitions
            .into_iter()
            .map(|transition| self.add_timed_transition(transition))
            .collect()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn timed_transitions(&self) -> impl Iterator<Item = &TimedTransition> + '_ {
        self.timed.iter().map(|slot| &slot.edge)
    }

    /// When the timer of a timed edge started, if it is running.
    pub fn timer_started_at(&self, id: EdgeId) -> Option<u64> {
        self.timed
            .iter()
            .find(|slot| slot.edge.id == Some(id))
            .and_then(|slot| slot.started_at)
    }

    /// Fire an event.
    ///
    /// Only the first event edge leaving the current state with a matching
    /// event is attempted. Returns `false` when no edge matches, when its
    /// guard rejects it, when its destination is missing, or when the
    /// machine has finished.
    pub fn trigger(&mut self, event: impl Into<EventId>) -> bool {
        let event = event.into();
        if !self.initialized {
            let now = self.clock.now_ms();
            self.init(now);
        }
        if self.finished {
            trace!(event = event.0, "machine finished, event ignored");
            return false;
        }

        let current = self.current;
        let found = self
            .transitions
            .iter()
            .position(|t| t.leaves(current) && t.trigger == event);

        match found {
            Some(index) => self.transition_to(EdgeRef::Event(index)),
            None => {
                trace!(event = event.0, "no transition for event");
                false
            }
        }
    }

    /// Poll the machine.
    ///
    /// Does nothing until at least `poll_interval_ms` have passed since the
    /// last effective poll or state change. Otherwise timed edges leaving the
    /// current state are scanned in order: an edge whose timer is not running
    /// starts it, an edge whose interval has elapsed is attempted, and the
    /// first successful transition ends the poll. When nothing fires, the
    /// current state's tick hook runs, followed by `tick`.
    pub fn run(&mut self, poll_interval_ms: u64, tick: Option<&mut dyn FnMut()>) {
        let now = self.clock.now_ms();
        if !self.initialized {
            self.init(now);
        }
        let Some(current) = self.current else {
            return;
        };
        if now < self.last_run.saturating_add(poll_interval_ms) {
            trace!(now, last_run = self.last_run, "poll throttled");
            return;
        }
        if self.finished {
            return;
        }
        self.last_run = now;

        for index in 0..self.timed.len() {
            let slot = &mut self.timed[index];
            if !slot.edge.leaves(Some(current)) {
                continue;
            }
            let Some(started_at) = slot.started_at else {
                slot.started_at = Some(now);
                trace!(edge = slot.edge.name.as_str(), now, "timer started");
                continue;
            };
            if now.saturating_sub(started_at) >= slot.edge.trigger.as_millis()
                && self.transition_to(EdgeRef::Timed(index))
            {
                return;
            }
        }

        if let Some(state) = self.states.get_mut(current.0) {
            state.tick();
        }
        if let Some(tick) = tick {
            tick();
        }
    }

    /// Return to the uninitialized state.
    ///
    /// No hook fires here; the initial state is entered again by the next
    /// `trigger` or `run`. The current and previous states stay readable
    /// until then.
    pub fn reset(&mut self) {
        self.initialized = false;
        self.finished = false;
        self.last_run = 0;
        self.last_transition = None;
        for slot in &mut self.timed {
            slot.started_at = None;
        }
        debug!(initial = ?self.initial, "machine reset");
    }

    pub fn state(&self) -> Option<StateId> {
        self.current
    }

    pub fn previous_state(&self) -> Option<StateId> {
        self.previous
    }

    pub fn is_in_state(&self, id: StateId) -> bool {
        self.current == Some(id)
    }

    /// Check if a final state has been entered since the last reset.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Milliseconds since the last state change, 0 if there was none.
    ///
    /// Entering the initial state counts as a state change.
    pub fn last_transitioned(&self) -> u64 {
        self.last_transition
            .map_or(0, |at| self.clock.now_ms().saturating_sub(at))
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn allocate_edge_id(&mut self) -> EdgeId {
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        id
    }

    /// Enter the initial state, stamped at `now`.
    fn init(&mut self, now: u64) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let arena = self.states.len();
        let Some(initial) = self.initial.filter(|id| id.0 < arena) else {
            warn!(initial = ?self.initial, "no usable initial state, machine stays idle");
            return;
        };
        self.change_to(initial, now);
    }

    fn transition_to(&mut self, edge: EdgeRef) -> bool {
        let arena = self.states.len();
        let known = move |id: StateId| id.0 < arena;
        let (from, admitted) = match edge {
            EdgeRef::Event(index) => {
                let t = &self.transitions[index];
                (t.from, t.admit(known))
            }
            EdgeRef::Timed(index) => {
                let t = &self.timed[index].edge;
                (t.from, t.admit(known))
            }
        };
        let Some(to) = admitted else {
            trace!(from = ?from, "transition rejected");
            return false;
        };

        if let Some(state) = from.and_then(|id| self.states.get_mut(id.0)) {
            state.exit();
        }
        match edge {
            EdgeRef::Event(index) => self.transitions[index].run_action(),
            EdgeRef::Timed(index) => self.timed[index].edge.run_action(),
        }
        if let Some(hook) = self.on_transition.as_mut() {
            hook();
        }

        let now = self.clock.now_ms();
        self.change_to(to, now);
        true
    }

    /// Enter `to`, which must be in the arena.
    fn change_to(&mut self, to: StateId, now: u64) {
        self.previous = self.current;
        self.current = Some(to);
        for slot in &mut self.timed {
            slot.started_at = None;
        }

        let state = &mut self.states[to.0];
        state.enter();
        let is_final = state.is_final();
        self.last_run = now;
        self.last_transition = Some(now);

        debug!(
            from = self.previous.and_then(|id| self.state_name(id)),
            to = self.states[to.0].name(),
            now,
            "state changed"
        );

        if is_final {
            if let Some(hook) = self.on_finished.as_mut() {
                hook();
            }
            self.finished = true;
            debug!(state = self.states[to.0].name(), "machine finished");
        }
    }
}

impl<C: Clock> fmt::Debug for Machine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("states", &self.states)
            .field("transitions", &self.transitions)
            .field("timed", &self.timed.len())
            .field("initial", &self.initial)
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("initialized", &self.initialized)
            .field("finished", &self.finished)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Guard, ManualClock};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    fn note(log: &Log, entry: &str) -> impl FnMut() + 'static {
        let log = Rc::clone(log);
        let entry = entry.to_string();
        move || log.borrow_mut().push(entry.clone())
    }

    fn traced(log: &Log, name: &str) -> State {
        State::new(name)
            .with_on_enter(note(log, &format!("enter {name}")))
            .with_on_tick(note(log, &format!("tick {name}")))
            .with_on_exit(note(log, &format!("exit {name}")))
    }

    #[test]
    fn state_is_unset_before_first_poll() {
        let mut machine = Machine::with_clock(ManualClock::new());
        let idle = machine.add_state(State::new("Idle"));
        machine.set_initial_state(idle);

        assert_eq!(machine.state(), None);
        assert_eq!(machine.previous_state(), None);
        assert!(!machine.is_initialized());
        assert_eq!(machine.last_transitioned(), 0);
    }

    #[test]
    fn first_poll_enters_initial_state_once() {
        let log: Log = Rc::default();
        let mut machine = Machine::with_clock(ManualClock::new());
        let idle = machine.add_state(traced(&log, "Idle"));
        machine.set_initial_state(idle);

        machine.run(0, None);
        machine.run(0, None);

        assert!(machine.is_in_state(idle));
        let enters = log.borrow().iter().filter(|e| *e == "enter Idle").count();
        assert_eq!(enters, 1);
    }

    #[test]
    fn missing_initial_state_keeps_machine_idle() {
        let log: Log = Rc::default();
        let mut machine = Machine::with_clock(ManualClock::new());
        let idle = machine.add_state(traced(&log, "Idle"));
        let busy = machine.add_state(State::new("Busy"));
        machine.add_transition(Transition::new(idle, busy, 1));

        machine.run(0, None);
        assert!(!machine.trigger(1));

        assert_eq!(machine.state(), None);
        assert!(machine.is_initialized());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn transition_hooks_fire_in_protocol_order() {
        let log: Log = Rc::default();
        let mut machine = Machine::with_clock(ManualClock::new());
        let a = machine.add_state(traced(&log, "A"));
        let b = machine.add_state(traced(&log, "B"));
        machine.add_transition(Transition::new(a, b, 1).with_action(note(&log, "action")));
        machine.set_on_transition(note(&log, "any"));
        machine.set_initial_state(a);

        assert!(machine.trigger(1));

        assert_eq!(
            *log.borrow(),
            vec!["enter A", "exit A", "action", "any", "enter B"]
        );
        assert_eq!(machine.previous_state(), Some(a));
        assert!(machine.is_in_state(b));
    }

    #[test]
    fn first_matching_transition_wins() {
        let mut machine = Machine::with_clock(ManualClock::new());
        let a = machine.add_state(State::new("A"));
        let b = machine.add_state(State::new("B"));
        let c = machine.add_state(State::new("C"));
        machine.add_transitions(vec![
            Transition::new(b, c, 1),
            Transition::new(a, b, 1),
            Transition::new(a, c, 1),
        ]);
        machine.set_initial_state(a);

        assert!(machine.trigger(1));
        assert!(machine.is_in_state(b));
    }

    #[test]
    fn rejected_guard_stops_the_scan() {
        let log: Log = Rc::default();
        let mut machine = Machine::with_clock(ManualClock::new());
        let a = machine.add_state(traced(&log, "A"));
        let b = machine.add_state(State::new("B"));
        let c = machine.add_state(State::new("C"));
        machine.add_transition(Transition::new(a, b, 1).with_guard(|| false));
        machine.add_transition(Transition::new(a, c, 1));
        machine.set_initial_state(a);

        assert!(!machine.trigger(1));
        assert!(machine.is_in_state(a));
        assert_eq!(*log.borrow(), vec!["enter A"]);
    }

    #[test]
    fn missing_destination_fails_without_hooks() {
        let log: Log = Rc::default();
        let mut machine = Machine::with_clock(ManualClock::new());
        let a = machine.add_state(traced(&log, "A"));
        let checked = Rc::new(Cell::new(false));
        let seen = Rc::clone(&checked);
        machine.add_transition(
            Transition::new(a, StateId(42), 3).with_guard(move || {
                seen.set(true);
                true
            }),
        );
        machine.set_initial_state(a);

        assert!(!machine.trigger(3));
        assert!(!checked.get());
        assert_eq!(*log.borrow(), vec!["enter A"]);
    }

    #[test]
    fn default_edge_filled_in_later() {
        let mut machine = Machine::with_clock(ManualClock::new());
        let a = machine.add_state(State::new("A"));
        let b = machine.add_state(State::new("B"));
        let mut edge = Transition::default();
        edge.setup(a, b, 5, None, "late", Some(Guard::new(|| true)));
        let id = machine.add_transition(edge);
        machine.set_initial_state(a);

        assert_eq!(machine.transitions()[0].id(), Some(id));
        assert!(machine.trigger(5));
        assert!(machine.is_in_state(b));
    }

    #[test]
    fn edge_ids_share_one_sequence() {
        let mut machine = Machine::with_clock(ManualClock::new());
        let a = machine.add_state(State::new("A"));
        let b = machine.add_state(State::new("B"));

        let first = machine.add_transition(Transition::new(a, b, 1));
        let second = machine.add_timed_transition(TimedTransition::new(a, b, 10u64));
        let third = machine.add_transition(Transition::new(b, a, 2));

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(third.index(), 2);
    }

    #[test]
    fn final_state_finishes_machine() {
        let finished = Rc::new(Cell::new(0));
        let counter = Rc::clone(&finished);
        let mut machine = Machine::with_clock(ManualClock::new());
        let idle = machine.add_state(State::new("Idle"));
        let done = machine.add_state(State::new("Done").with_final(true));
        machine.add_transition(Transition::new(idle, done, 1));
        machine.add_transition(Transition::new(done, idle, 2));
        machine.set_on_finished(move || counter.set(counter.get() + 1));
        machine.set_initial_state(idle);

        assert!(machine.trigger(1));
        assert!(machine.is_finished());
        assert!(!machine.trigger(2));
        assert!(machine.is_in_state(done));
        assert_eq!(finished.get(), 1);
    }

    #[test]
    fn timed_transition_waits_for_interval() {
        let clock = ManualClock::new();
        let mut machine = Machine::with_clock(clock.clone());
        let idle = machine.add_state(State::new("Idle"));
        let active = machine.add_state(State::new("Active"));
        let edge = machine.add_timed_transition(TimedTransition::new(idle, active, 500u64));
        machine.set_initial_state(idle);

        machine.run(0, None);
        assert_eq!(machine.timer_started_at(edge), Some(0));

        clock.set(499);
        machine.run(0, None);
        assert!(machine.is_in_state(idle));

        clock.set(500);
        machine.run(0, None);
        assert!(machine.is_in_state(active));
        assert_eq!(machine.timer_started_at(edge), None);
    }

    #[test]
    fn timed_transition_skips_tick_hooks_when_firing() {
        let log: Log = Rc::default();
        let clock = ManualClock::new();
        let mut machine = Machine::with_clock(clock.clone());
        let a = machine.add_state(traced(&log, "A"));
        let b = machine.add_state(traced(&log, "B"));
        machine.add_timed_transition(TimedTransition::new(a, b, 10u64));
        machine.set_initial_state(a);
        let mut outer = note(&log, "outer");

        machine.run(0, Some(&mut outer));
        clock.set(10);
        machine.run(0, Some(&mut outer));
        machine.run(0, Some(&mut outer));

        assert_eq!(
            *log.borrow(),
            vec![
                "enter A", "tick A", "outer", "exit A", "enter B", "tick B", "outer"
            ]
        );
    }

    #[test]
    fn poll_interval_throttles_runs() {
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);
        let clock = ManualClock::new();
        let mut machine = Machine::with_clock(clock.clone());
        let idle = machine
            .add_state(State::new("Idle").with_on_tick(move || counter.set(counter.get() + 1)));
        machine.set_initial_state(idle);

        // entry stamps last_run, so the first poll is throttled
        machine.run(100, None);
        assert_eq!(ticks.get(), 0);

        clock.set(99);
        machine.run(100, None);
        assert_eq!(ticks.get(), 0);

        clock.set(100);
        machine.run(100, None);
        machine.run(100, None);
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn leaving_a_state_clears_its_timers() {
        let clock = ManualClock::new();
        let mut machine = Machine::with_clock(clock.clone());
        let a = machine.add_state(State::new("A"));
        let b = machine.add_state(State::new("B"));
        let timer = machine.add_timed_transition(TimedTransition::new(a, b, 100u64));
        machine.add_transition(Transition::new(a, b, 1));
        machine.add_transition(Transition::new(b, a, 2));
        machine.set_initial_state(a);

        machine.run(0, None);
        assert_eq!(machine.timer_started_at(timer), Some(0));

        clock.set(50);
        assert!(machine.trigger(1));
        assert_eq!(machine.timer_started_at(timer), None);

        clock.set(120);
        assert!(machine.trigger(2));
        machine.run(0, None);
        assert_eq!(machine.timer_started_at(timer), Some(120));
        assert!(machine.is_in_state(a));
    }

    #[test]
    fn reset_reenters_initial_state_lazily() {
        let log: Log = Rc::default();
        let mut machine = Machine::with_clock(ManualClock::new());
        let idle = machine.add_state(traced(&log, "Idle"));
        let done = machine.add_state(State::new("Done").with_final(true));
        machine.add_transition(Transition::new(idle, done, 1));
        machine.set_initial_state(idle);
        assert!(machine.trigger(1));

        machine.reset();
        assert!(!machine.is_finished());
        assert!(machine.is_in_state(done));
        assert_eq!(machine.last_transitioned(), 0);

        machine.run(0, None);
        assert!(machine.is_in_state(idle));
        assert_eq!(machine.previous_state(), Some(done));
        let enters = log.borrow().iter().filter(|e| *e == "enter Idle").count();
        assert_eq!(enters, 2);
    }

    #[test]
    fn reset_clears_running_timers() {
        let clock = ManualClock::new();
        let mut machine = Machine::with_clock(clock.clone());
        let a = machine.add_state(State::new("A"));
        let b = machine.add_state(State::new("B"));
        let timer = machine.add_timed_transition(TimedTransition::new(a, b, 100u64));
        machine.set_initial_state(a);

        machine.run(0, None);
        assert_eq!(machine.timer_started_at(timer), Some(0));

        clock.set(50);
        machine.reset();
        assert_eq!(machine.timer_started_at(timer), None);

        clock.set(60);
        machine.run(0, None);
        assert_eq!(machine.timer_started_at(timer), Some(60));

        clock.set(159);
        machine.run(0, None);
        assert!(machine.is_in_state(a));

        clock.set(160);
        machine.run(0, None);
        assert!(machine.is_in_state(b));
    }

    #[test]
    fn new_initial_state_waits_for_reset() {
        let mut machine = Machine::with_clock(ManualClock::new());
        let a = machine.add_state(State::new("A"));
        let b = machine.add_state(State::new("B"));
        machine.set_initial_state(a);
        machine.run(0, None);

        machine.set_initial_state(b);
        machine.run(0, None);
        assert!(!machine.trigger(1));
        assert!(machine.is_in_state(a));
        assert_eq!(machine.initial_state(), Some(b));

        machine.reset();
        machine.run(0, None);
        assert!(machine.is_in_state(b));
        assert_eq!(machine.previous_state(), Some(a));
    }

    /// Clock that moves forward by one millisecond on every read.
    struct DriftingClock(Cell<u64>);

    impl Clock for DriftingClock {
        fn now_ms(&self) -> u64 {
            let now = self.0.get();
            self.0.set(now + 1);
            now
        }
    }

    #[test]
    fn first_poll_is_not_throttled_by_a_moving_clock() {
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);
        let mut machine = Machine::with_clock(DriftingClock(Cell::new(0)));
        let a = machine
            .add_state(State::new("A").with_on_tick(move || counter.set(counter.get() + 1)));
        let b = machine.add_state(State::new("B"));
        let timer = machine.add_timed_transition(TimedTransition::new(a, b, 100u64));
        machine.set_initial_state(a);

        machine.run(0, None);

        assert!(machine.is_in_state(a));
        assert_eq!(ticks.get(), 1);
        assert_eq!(machine.timer_started_at(timer), Some(0));
    }

    #[test]
    fn last_transitioned_tracks_clock() {
        let clock = ManualClock::starting_at(1_000);
        let mut machine = Machine::with_clock(clock.clone());
        let idle = machine.add_state(State::new("Idle"));
        machine.set_initial_state(idle);

        machine.run(0, None);
        clock.advance(250);

        assert_eq!(machine.last_transitioned(), 250);
    }

    #[test]
    fn state_hooks_can_be_reassigned() {
        let log: Log = Rc::default();
        let mut machine = Machine::with_clock(ManualClock::new());
        let idle = machine.add_state(State::new("Idle"));
        machine.set_initial_state(idle);
        if let Some(state) = machine.state_mut(idle) {
            state.set_on_enter(note(&log, "late enter"));
            state.set_name("Waiting");
        }

        machine.run(0, None);

        assert_eq!(*log.borrow(), vec!["late enter"]);
        assert_eq!(machine.state_name(idle), Some("Waiting"));
    }
}

//! Graphviz export of a machine's graph.
//!
//! The output is meant for humans and diagram tooling. It is not a stable
//! format and is never parsed back.

use super::machine::Machine;
use crate::core::{Clock, Edge, StateId};
use std::fmt::Write;

const HEADER: &str = "\trankdir=LR; pad=0.5\n\tnode [shape=circle fixedsize=true width=1.5];\n";

impl<C: Clock> Machine<C> {
    /// Render the configured graph as a DOT digraph.
    ///
    /// Event edges are labelled `name (ID=<event>)`, timed edges
    /// `name (<ms>ms)`. The active state is filled, the initial state is
    /// filled black.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tickfsm::core::{State, TimedTransition};
    /// use tickfsm::engine::Machine;
    ///
    /// let mut machine = Machine::new();
    /// let on = machine.add_state(State::new("On"));
    /// let off = machine.add_state(State::new("Off"));
    /// machine.add_timed_transition(TimedTransition::new(on, off, 500u64).named("blink"));
    /// machine.set_initial_state(on);
    ///
    /// let dot = machine.to_dot();
    /// assert!(dot.starts_with("digraph G {"));
    /// assert!(dot.contains("\"On\" -> \"Off\" [label=\"blink (500ms)\"];"));
    /// ```
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph G {\n");
        out.push_str(HEADER);

        for edge in self.transitions() {
            let label = format!("ID={}", edge.event_id().0);
            self.write_edge(&mut out, edge, &label);
        }
        for edge in self.timed_transitions() {
            let label = format!("{}ms", edge.interval().as_millis());
            self.write_edge(&mut out, edge, &label);
        }

        if self.is_initialized() {
            if let Some(current) = self.state() {
                let _ = writeln!(
                    out,
                    "\t\"{}\" [style=filled fontcolor=white];",
                    self.node_name(Some(current))
                );
            }
        }
        if let Some(initial) = self.initial_state() {
            let _ = writeln!(
                out,
                "\t\"{}\" [style=filled fontcolor=white fillcolor=black];\n",
                self.node_name(Some(initial))
            );
        }

        out.push_str("}\n");
        out
    }

    fn write_edge<T>(&self, out: &mut String, edge: &Edge<T>, trigger: &str) {
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "\t\"{}\" -> \"{}\" [label=\"{} ({})\"];",
            self.node_name(edge.from()),
            self.node_name(edge.to()),
            edge.name(),
            trigger
        );
    }

    fn node_name(&self, id: Option<StateId>) -> &str {
        id.and_then(|id| self.state_name(id)).unwrap_or("?")
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{ManualClock, State, TimedTransition, Transition};
    use crate::engine::Machine;

    fn sample() -> Machine<ManualClock> {
        let mut machine = Machine::with_clock(ManualClock::new());
        let idle = machine.add_state(State::new("Idle"));
        let active = machine.add_state(State::new("Active"));
        machine.add_transition(Transition::new(idle, active, 1).named("start"));
        machine.add_timed_transition(TimedTransition::new(active, idle, 250u64).named("timeout"));
        machine.set_initial_state(idle);
        machine
    }

    #[test]
    fn dot_lists_every_edge_with_its_trigger() {
        let dot = sample().to_dot();

        assert_eq!(
            dot,
            "digraph G {\n\
             \trankdir=LR; pad=0.5\n\
             \tnode [shape=circle fixedsize=true width=1.5];\n\
             \t\"Idle\" -> \"Active\" [label=\"start (ID=1)\"];\n\
             \t\"Active\" -> \"Idle\" [label=\"timeout (250ms)\"];\n\
             \t\"Idle\" [style=filled fontcolor=white fillcolor=black];\n\
             \n\
             }\n"
        );
    }

    #[test]
    fn dot_marks_active_state_once_running() {
        let mut machine = sample();
        assert!(machine.trigger(1));

        let dot = machine.to_dot();

        assert!(dot.contains("\t\"Active\" [style=filled fontcolor=white];\n"));
        assert!(dot.contains("\t\"Idle\" [style=filled fontcolor=white fillcolor=black];\n"));
    }

    #[test]
    fn dot_labels_come_from_edge_triggers() {
        let mut machine = Machine::with_clock(ManualClock::new());
        let a = machine.add_state(State::new("A"));
        let b = machine.add_state(State::new("B"));
        machine.add_transition(Transition::new(a, b, -3).named("back"));
        machine.add_timed_transition(TimedTransition::new(b, a, 0u64).named("now"));

        let dot = machine.to_dot();

        assert!(dot.contains("\t\"A\" -> \"B\" [label=\"back (ID=-3)\"];\n"));
        assert!(dot.contains("\t\"B\" -> \"A\" [label=\"now (0ms)\"];\n"));
    }

    #[test]
    fn dot_renders_unset_endpoints_as_placeholder() {
        let mut machine = Machine::with_clock(ManualClock::new());
        machine.add_transition(Transition::default().named("blank"));

        let dot = machine.to_dot();

        assert!(dot.contains("\t\"?\" -> \"?\" [label=\"blank (ID=0)\"];\n"));
        assert!(!dot.contains("fillcolor=black"));
    }
}

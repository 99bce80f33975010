//! Hosted Component Lifecycle
//!
//! This example drives two machines from a component's lifecycle hooks:
//! an event-driven Idle/Active machine and a timed blinker.
//!
//! Key concepts:
//! - Lazy entry of the initial state on the first poll
//! - Event edges fired from `on_running` and `on_close`
//! - Timed edges advanced by polling with a throttle interval
//! - Reset on re-open instead of rebuilding the machine
//!
//! Run with: RUST_LOG=debug cargo run --example lifecycle

use std::thread;
use std::time::Duration;
use tickfsm::component::{Component, Hosted};
use tickfsm::core::{State, StateId, TimedTransition, Transition};
use tickfsm::engine::Machine;
use tickfsm::event_ids;
use tracing::info;
use tracing_subscriber::EnvFilter;

event_ids! {
    enum AppEvent {
        Start = 1,
        Stop = 2,
    }
}

struct DemoApp {
    control: Machine,
    blinker: Machine,
    idle: StateId,
    active: StateId,
}

impl DemoApp {
    fn new() -> Self {
        let mut control = Machine::new();
        let idle = control.add_state(
            State::new("Idle")
                .with_on_enter(|| info!("enter Idle"))
                .with_on_exit(|| info!("exit Idle")),
        );
        let active = control.add_state(
            State::new("Active")
                .with_on_enter(|| info!("enter Active"))
                .with_on_exit(|| info!("exit Active")),
        );
        control.add_transitions(vec![
            Transition::new(idle, active, AppEvent::Start)
                .named("StartTransition")
                .with_action(|| info!("transition start")),
            Transition::new(active, idle, AppEvent::Stop)
                .named("StopTransition")
                .with_action(|| info!("transition stop")),
        ]);
        control.set_initial_state(idle);

        let mut blinker = Machine::new();
        let on = blinker.add_state(State::new("On").with_on_enter(|| info!("led on")));
        let off = blinker.add_state(State::new("Off").with_on_enter(|| info!("led off")));
        blinker.add_timed_transitions(vec![
            TimedTransition::new(on, off, 100u64).named("dim"),
            TimedTransition::new(off, on, 150u64).named("light"),
        ]);
        blinker.set_initial_state(on);

        Self {
            control,
            blinker,
            idle,
            active,
        }
    }
}

impl Component for DemoApp {
    fn name(&self) -> &str {
        "DemoApp"
    }

    fn on_open(&mut self) {
        info!("on open");
        self.control.reset();
        self.blinker.reset();
    }

    fn on_running(&mut self) {
        if self.control.state() != Some(self.active) {
            self.control.trigger(AppEvent::Start);
        }
        self.blinker.run(20, None);
    }

    fn on_close(&mut self) {
        info!("on close");
        if self.control.is_in_state(self.active) {
            self.control.trigger(AppEvent::Stop);
        }
        info!(back_in_idle = self.control.is_in_state(self.idle), "control stopped");
    }
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let mut app = Hosted::new(DemoApp::new());
    app.open();
    for _ in 0..40 {
        app.update();
        thread::sleep(Duration::from_millis(10));
    }

    println!("{}", app.component().blinker.to_dot());
    match app.component().control.snapshot().to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(error = %e, "snapshot failed"),
    }

    app.close();
}

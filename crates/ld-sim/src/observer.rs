//! Simulation observer trait for event collection and progress reporting.

use ld_core::{EventLog, EventSink, NoopSink, SimEvent, Tick};
use ld_elevator::Elevator;

use crate::RunOutcome;

/// Receives every [`SimEvent`] (via its [`EventSink`] supertrait) plus
/// callbacks at tick boundaries from [`Sim::run`][crate::Sim::run].
///
/// The hook methods have no-op defaults, so a plain event sink only needs
/// an empty `impl SimObserver for MySink {}`.
pub trait SimObserver: EventSink {
    /// Called at the start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick, _fleet: &[Elevator]) {}

    /// Called after the motion phase of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _fleet: &[Elevator]) {}

    /// Called once when the run stops.
    fn on_sim_end(&mut self, _outcome: &RunOutcome) {}
}

impl SimObserver for NoopSink {}

impl SimObserver for EventLog {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_tick_start(&mut self, tick: Tick, fleet: &[Elevator]) {
        (**self).on_tick_start(tick, fleet);
    }

    fn on_tick_end(&mut self, tick: Tick, fleet: &[Elevator]) {
        (**self).on_tick_end(tick, fleet);
    }

    fn on_sim_end(&mut self, outcome: &RunOutcome) {
        (**self).on_sim_end(outcome);
    }
}

// ── LogObserver ───────────────────────────────────────────────────────────────

/// Renders the run as text through the `log` facade, then forwards
/// everything to `inner`.
///
/// Events go out at `info`, the fleet state at every tick start at `trace`.
///
/// ```rust,ignore
/// let mut obs = LogObserver::new(EventLog::new());
/// sim.run(&mut obs);
/// let events = obs.into_inner();
/// ```
#[derive(Debug, Default)]
pub struct LogObserver<O = NoopSink> {
    inner: O,
}

impl<O> LogObserver<O> {
    pub fn new(inner: O) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: EventSink> EventSink for LogObserver<O> {
    fn emit(&mut self, event: SimEvent) {
        log::info!("{event}");
        self.inner.emit(event);
    }
}

impl<O: SimObserver> SimObserver for LogObserver<O> {
    fn on_tick_start(&mut self, tick: Tick, fleet: &[Elevator]) {
        if log::log_enabled!(log::Level::Trace) {
            let cars: Vec<String> = fleet.iter().map(ToString::to_string).collect();
            log::trace!("Time {tick}: [{}]", cars.join(", "));
        }
        self.inner.on_tick_start(tick, fleet);
    }

    fn on_tick_end(&mut self, tick: Tick, fleet: &[Elevator]) {
        self.inner.on_tick_end(tick, fleet);
    }

    fn on_sim_end(&mut self, outcome: &RunOutcome) {
        match outcome.last_tick {
            Some(last) => log::info!(
                "simulation stopped after tick {last} ({} ticks, all exited: {})",
                outcome.ticks_run, outcome.all_exited
            ),
            None => log::info!("simulation ran no ticks"),
        }
        self.inner.on_sim_end(outcome);
    }
}

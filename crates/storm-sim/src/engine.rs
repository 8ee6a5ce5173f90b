//! Simulation engine: the live storm state simulator.
//!
//! `Simulation` owns the storm store, the selection, and the injected
//! update policy and clock. It processes queued commands, advances every
//! storm by one step per tick, and produces `TrackerSnapshot`s. It never
//! reads the wall clock or sleeps, so tests step ticks directly.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{error, info, warn};

use storm_core::commands::TrackerCommand;
use storm_core::constants::{DEFAULT_SEED, TICK_INTERVAL_MS};
use storm_core::entity::StormEntity;
use storm_core::enums::ProjectionMode;
use storm_core::error::StormError;
use storm_core::state::{TrackGeometry, TrackerSnapshot};
use storm_core::types::{MapView, SimTime};
use storm_geo::track::derive_geometry;

use crate::selection::SelectionController;
use crate::source::{ChaChaJitter, Clock, SystemClock};
use crate::store::StormStore;
use crate::systems;
use crate::systems::random_walk::{RandomWalkUpdatePolicy, UpdatePolicy};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for the random walk. Same seed = same simulation.
    pub seed: u64,
    /// Surface that projected points target.
    pub projection: ProjectionMode,
    /// Initial tile-map view handed to the rendering layer.
    pub map_view: MapView,
    /// Wall-clock length of one tick; sim time advances by this much.
    pub tick_interval: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            projection: ProjectionMode::default(),
            map_view: MapView::default(),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }
}

/// The simulation. Owns the store and all sim state.
pub struct Simulation {
    store: StormStore,
    selection: SelectionController,
    policy: Box<dyn UpdatePolicy + Send>,
    clock: Box<dyn Clock + Send>,
    time: SimTime,
    running: bool,
    projection: ProjectionMode,
    map_view: MapView,
    dt_secs: f64,
    command_queue: VecDeque<TrackerCommand>,
}

impl Simulation {
    /// Create a stopped simulation with a seeded random walk and the
    /// system clock.
    pub fn new(config: SimConfig, seeds: Vec<StormEntity>) -> Result<Self, StormError> {
        Self::with_sources(
            config,
            seeds,
            RandomWalkUpdatePolicy::new(ChaChaJitter::new(config.seed)),
            SystemClock,
        )
    }

    /// Create a stopped simulation with an explicit policy and clock.
    pub fn with_sources(
        config: SimConfig,
        seeds: Vec<StormEntity>,
        policy: impl UpdatePolicy + Send + 'static,
        clock: impl Clock + Send + 'static,
    ) -> Result<Self, StormError> {
        Ok(Self {
            store: StormStore::initialize(seeds)?,
            selection: SelectionController::new(),
            policy: Box::new(policy),
            clock: Box::new(clock),
            time: SimTime::default(),
            running: false,
            projection: config.projection,
            map_view: config.map_view,
            dt_secs: config.tick_interval.as_secs_f64(),
            command_queue: VecDeque::new(),
        })
    }

    /// Resume ticking.
    pub fn start(&mut self) {
        if !self.running {
            info!(tick = self.time.tick, "simulation started");
            self.running = true;
        }
    }

    /// Halt further mutation. State already applied is kept.
    pub fn stop(&mut self) {
        if self.running {
            info!(tick = self.time.tick, "simulation stopped");
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: TrackerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = TrackerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, advance one tick if running, and return
    /// the resulting snapshot.
    pub fn tick(&mut self) -> TrackerSnapshot {
        self.process_commands();

        if self.running {
            self.advance();
            self.time.advance_by(self.dt_secs);
        }

        self.snapshot()
    }

    /// Current state without advancing.
    pub fn snapshot(&self) -> TrackerSnapshot {
        systems::snapshot::build_snapshot(
            &self.store,
            &self.time,
            self.running,
            self.projection,
            self.map_view,
            &self.selection,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the storm store.
    pub fn store(&self) -> &StormStore {
        &self.store
    }

    pub fn projection(&self) -> ProjectionMode {
        self.projection
    }

    pub fn set_projection(&mut self, mode: ProjectionMode) {
        self.projection = mode;
    }

    /// Focus a storm. Unknown ids fail and keep the prior selection.
    pub fn select(&mut self, id: u32) -> Result<(), StormError> {
        self.selection.select(&self.store, id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> Option<u32> {
        self.selection.current()
    }

    /// Derived geometry for the selected storm, computed on demand.
    pub fn selected_geometry(&self) -> Option<TrackGeometry> {
        let id = self.selection.current()?;
        let storm = self.store.get(id).ok()?;
        Some(derive_geometry(&storm, &self.projection))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: TrackerCommand) {
        match command {
            TrackerCommand::Select { storm_id } => {
                if let Err(err) = self.select(storm_id) {
                    warn!(%err, "select command rejected");
                }
            }
            TrackerCommand::ClearSelection => self.clear_selection(),
            TrackerCommand::Start => self.start(),
            TrackerCommand::Stop => self.stop(),
            TrackerCommand::SetProjection { mode } => self.set_projection(mode),
        }
    }

    /// One step for every storm: plan all updates from the pre-tick state,
    /// then apply them together.
    fn advance(&mut self) {
        let now = self.clock.now();
        let updates = systems::random_walk::run(&self.store, self.policy.as_mut(), now);
        if let Err(err) = self.store.apply_tick(&updates) {
            // The policy pre-clamps, so this is a policy bug. Drop the tick.
            error!(%err, tick = self.time.tick, "update policy produced an invalid tick");
        }
    }
}

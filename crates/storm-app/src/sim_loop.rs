//! Simulation loop thread: ticks the simulation on a fixed wall-clock
//! interval and publishes snapshots.
//!
//! The simulation is moved into the thread, so it has exactly one owner
//! and ticks never overlap. Commands arrive via `mpsc` channel. After each
//! complete tick the snapshot is handed to a callback and stored in shared
//! state for synchronous polling; readers never see a half-applied tick.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use tracing::info;

use storm_core::commands::TrackerCommand;
use storm_core::state::TrackerSnapshot;
use storm_sim::engine::Simulation;

use crate::state::{new_shared_snapshot, LoopCommand, SharedSnapshot};

/// Handle to a running simulation loop. Dropping it stops the loop.
pub struct SimLoopHandle {
    command_tx: mpsc::Sender<LoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: Option<JoinHandle<()>>,
}

impl SimLoopHandle {
    /// Forward a tracker command; applied at the next tick boundary.
    pub fn send(&self, command: TrackerCommand) -> anyhow::Result<()> {
        self.command_tx
            .send(LoopCommand::Tracker(command))
            .map_err(|_| anyhow!("simulation loop has exited"))
    }

    /// Latest published snapshot, if any tick has completed.
    pub fn latest(&self) -> Option<TrackerSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop future ticks and wait for the thread. A tick already in
    /// flight completes first.
    pub fn stop(mut self) -> anyhow::Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> anyhow::Result<()> {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| anyhow!("simulation loop thread panicked"))?;
        }
        Ok(())
    }
}

impl Drop for SimLoopHandle {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

/// Start `simulation` and spawn the loop in a new thread.
pub fn spawn_sim_loop<F>(
    mut simulation: Simulation,
    tick_interval: Duration,
    on_snapshot: F,
) -> anyhow::Result<SimLoopHandle>
where
    F: FnMut(&TrackerSnapshot) + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot = new_shared_snapshot();
    let published = latest_snapshot.clone();

    simulation.start();
    let thread = std::thread::Builder::new()
        .name("storm-sim-loop".into())
        .spawn(move || {
            run_sim_loop(simulation, tick_interval, command_rx, &published, on_snapshot);
        })
        .context("failed to spawn simulation loop thread")?;

    Ok(SimLoopHandle {
        command_tx,
        latest_snapshot,
        thread: Some(thread),
    })
}

/// Wrap `emit` so only the first `limit` snapshots reach it. `done` is
/// signalled once, after the last one. Ticks that land between that and
/// shutdown are swallowed.
pub fn first_snapshots<F>(
    limit: u64,
    done: mpsc::Sender<()>,
    mut emit: F,
) -> impl FnMut(&TrackerSnapshot) + Send
where
    F: FnMut(&TrackerSnapshot) + Send,
{
    let mut seen = 0u64;
    move |snapshot: &TrackerSnapshot| {
        if seen >= limit {
            return;
        }
        emit(snapshot);
        seen += 1;
        if seen == limit {
            let _ = done.send(());
        }
    }
}

/// The loop. Runs until Shutdown or channel disconnect.
fn run_sim_loop<F>(
    mut simulation: Simulation,
    tick_interval: Duration,
    command_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &SharedSnapshot,
    mut on_snapshot: F,
) where
    F: FnMut(&TrackerSnapshot),
{
    info!(interval_ms = tick_interval.as_millis() as u64, "simulation loop started");
    // First mutation lands one full interval after start
    let mut next_tick_time = Instant::now() + tick_interval;

    loop {
        // 1. Wait for the next tick, still listening for commands
        loop {
            let now = Instant::now();
            if next_tick_time <= now {
                if now - next_tick_time > tick_interval * 2 {
                    // Too far behind; reset to avoid a catch-up spiral
                    next_tick_time = now;
                }
                break;
            }
            match command_rx.recv_timeout(next_tick_time - now) {
                Ok(LoopCommand::Tracker(command)) => simulation.queue_command(command),
                Ok(LoopCommand::Shutdown) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                    return finish(&mut simulation);
                }
                Err(mpsc::RecvTimeoutError::Timeout) => break,
            }
        }

        // 2. Drain anything that arrived at the deadline
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Tracker(command)) => simulation.queue_command(command),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    return finish(&mut simulation);
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 3. Advance one tick (the simulation handles stop semantics itself)
        let snapshot = simulation.tick();

        // 4. Hand the snapshot to the rendering side
        on_snapshot(&snapshot);

        // 5. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_tick_time += tick_interval;
    }
}

fn finish(simulation: &mut Simulation) {
    simulation.stop();
    info!(tick = simulation.time().tick, "simulation loop stopped");
}

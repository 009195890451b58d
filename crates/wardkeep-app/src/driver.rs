//! Game loop thread — runs an engine at 60 Hz and publishes snapshots.
//!
//! Commands arrive via `mpsc` channel and are queued into the engine at
//! tick boundaries. The latest snapshot is stored in shared state for
//! synchronous polling. Input polling, simulation, and snapshot
//! publication run strictly sequentially within one tick.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::Serialize;

use wardkeep_core::constants::TICK_RATE;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// What the driver needs from an engine: queue commands, advance one
/// tick, hand back the visible state.
pub trait Simulation: Send + 'static {
    type Command: Send + 'static;
    type Snapshot: Serialize + Send + 'static;

    fn queue_command(&mut self, command: Self::Command);
    fn tick(&mut self) -> Self::Snapshot;
}

impl Simulation for wardkeep_defense::GameEngine {
    type Command = wardkeep_defense::PlayerCommand;
    type Snapshot = wardkeep_defense::GameStateSnapshot;

    fn queue_command(&mut self, command: Self::Command) {
        wardkeep_defense::GameEngine::queue_command(self, command);
    }

    fn tick(&mut self) -> Self::Snapshot {
        wardkeep_defense::GameEngine::tick(self)
    }
}

impl Simulation for wardkeep_skirmish::SkirmishEngine {
    type Command = wardkeep_skirmish::PlayerCommand;
    type Snapshot = wardkeep_skirmish::GameStateSnapshot;

    fn queue_command(&mut self, command: Self::Command) {
        wardkeep_skirmish::SkirmishEngine::queue_command(self, command);
    }

    fn tick(&mut self) -> Self::Snapshot {
        wardkeep_skirmish::SkirmishEngine::tick(self)
    }
}

/// Messages accepted by the loop thread.
pub enum LoopCommand<C> {
    Command(C),
    Shutdown,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle for clean joins.
pub fn spawn_game_loop<S: Simulation>(
    mut sim: S,
    latest_snapshot: Arc<Mutex<Option<S::Snapshot>>>,
) -> (mpsc::Sender<LoopCommand<S::Command>>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand<S::Command>>();

    let handle = std::thread::Builder::new()
        .name("wardkeep-game-loop".into())
        .spawn(move || {
            run_game_loop(&mut sim, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop<S: Simulation>(
    sim: &mut S,
    cmd_rx: mpsc::Receiver<LoopCommand<S::Command>>,
    latest_snapshot: &Mutex<Option<S::Snapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Command(command)) => sim.queue_command(command),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = sim.tick();

        // 3. Publish for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep out the rest of the frame budget
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

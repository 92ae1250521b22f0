//! The background simulation loop and its thread-safe handle.
//!
//! [`Simulation`] is the explicit context object the caller owns: no
//! process-wide state. It wraps the world in a reader-writer lock and runs
//! the tick loop on a dedicated thread, leaving the owning thread free to
//! render and to inject control input.
//!
//! # Concurrency contract
//!
//! All mutation happens on the simulation thread, under the write lock, one
//! whole tick at a time. Render-facing accessors never hand out references
//! into the shared state: they take the read lock and return **copies**
//! (copy-on-read snapshots), so the read path can never observe a
//! half-applied tick and never races the integrator.
//!
//! Cancellation is cooperative: [`request_stop`](Simulation::request_stop)
//! clears the running flag, the loop observes it at the top of the next
//! iteration and exits after finishing its current tick. Joining the spawned
//! thread after requesting a stop therefore guarantees no partial tick
//! interleaves with teardown. A simulation is not restartable: once stopped,
//! [`run_simulation_loop`](Simulation::run_simulation_loop) returns
//! immediately.
//!
//! # Example
//!
//! ```
//! use planar_core::{Body, Simulation, World};
//! use planar_types::{Material, Vec2};
//!
//! let mut world = World::default();
//! world.add_body(
//!     Body::circle(Vec2::new(0.0, 10.0), 0.5, 0.8, false, Material::birch()).unwrap(),
//! );
//!
//! let simulation = Simulation::new(world);
//! let handle = simulation.spawn();
//!
//! // ... render from snapshots while the loop runs ...
//! let snapshot = simulation.snapshot();
//! assert_eq!(snapshot.bodies.len(), 1);
//!
//! simulation.request_stop();
//! handle.join().unwrap();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use parking_lot::RwLock;
use planar_types::{Liquid, Vec2};

use crate::body::Body;
use crate::world::World;

/// A coherent copy of the render-facing world state.
#[derive(Debug, Clone)]
pub struct WorldSnapshot {
    /// All bodies, in insertion order.
    pub bodies: Vec<Body>,
    /// All liquids, in insertion order.
    pub liquids: Vec<Liquid>,
}

struct Shared {
    world: RwLock<World>,
    running: AtomicBool,
}

/// Owning handle for a running simulation.
///
/// Cheap to clone; every clone addresses the same world. One clone drives
/// the loop (usually via [`spawn`](Simulation::spawn)), the others read
/// snapshots and inject input.
#[derive(Clone)]
pub struct Simulation {
    shared: Arc<Shared>,
}

impl Simulation {
    /// Wrap a world for concurrent simulation. The running flag starts set.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self {
            shared: Arc::new(Shared {
                world: RwLock::new(world),
                running: AtomicBool::new(true),
            }),
        }
    }

    /// Run the simulation loop on the calling thread until stopped.
    ///
    /// Each iteration measures the wall-clock delta since the previous one,
    /// advances the world by that delta under the write lock, then sleeps
    /// the configured tick interval. The timestep is the measured delta
    /// (variable), not the interval.
    pub fn run_simulation_loop(&self) {
        let tick_interval = self.shared.world.read().config().tick_interval;
        tracing::info!(?tick_interval, "simulation loop started");

        let mut last_tick = Instant::now();
        while self.shared.running.load(Ordering::Acquire) {
            let now = Instant::now();
            let dt = now.duration_since(last_tick).as_secs_f64();
            last_tick = now;

            self.shared.world.write().tick(dt);

            thread::sleep(tick_interval);
        }

        tracing::info!("simulation loop stopped");
    }

    /// Spawn a background thread running
    /// [`run_simulation_loop`](Self::run_simulation_loop).
    ///
    /// The owner must call [`request_stop`](Self::request_stop) and then
    /// join the returned handle to tear down cleanly.
    #[must_use]
    pub fn spawn(&self) -> JoinHandle<()> {
        let simulation = self.clone();
        thread::spawn(move || simulation.run_simulation_loop())
    }

    /// Ask the loop to exit after its current iteration. Idempotent.
    pub fn request_stop(&self) {
        self.shared.running.store(false, Ordering::Release);
    }

    /// Whether the loop is still supposed to run.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Append a body, returning its index handle.
    pub fn add_body(&self, body: Body) -> usize {
        self.shared.world.write().add_body(body)
    }

    /// Append a liquid, returning its index handle.
    pub fn add_liquid(&self, liquid: Liquid) -> usize {
        self.shared.world.write().add_liquid(liquid)
    }

    /// Number of bodies.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.shared.world.read().body_count()
    }

    /// Number of liquids.
    #[must_use]
    pub fn liquid_count(&self) -> usize {
        self.shared.world.read().liquid_count()
    }

    /// A copy of the body at `index`, or `None` when out of range.
    #[must_use]
    pub fn body(&self, index: usize) -> Option<Body> {
        self.shared.world.read().body(index).cloned()
    }

    /// A copy of the liquid at `index`, or `None` when out of range.
    #[must_use]
    pub fn liquid(&self, index: usize) -> Option<Liquid> {
        self.shared.world.read().liquid(index).cloned()
    }

    /// Nudge a body by `delta` (manual control input).
    ///
    /// Returns false when the index is out of range.
    pub fn move_body(&self, index: usize, delta: Vec2) -> bool {
        self.shared.world.write().move_body(index, delta)
    }

    /// Take a coherent copy of the render-facing state.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        let world = self.shared.world.read();
        WorldSnapshot {
            bodies: world.bodies().to_vec(),
            liquids: world.liquids().to_vec(),
        }
    }
}

//! Simulation driver.
//!
//! A `Simulation` owns the system, its parameters and the active force set.
//! It can be advanced one tick at a time with [`Simulation::step`], driven
//! with a per-tick callback via [`Simulation::run`], or consumed as an
//! unbounded sequence of [`Snapshot`]s via [`Simulation::ticks`].
//!
//! Every form checks a shared [`StopHandle`] once per tick boundary.

use std::iter::FusedIterator;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::{debug, trace};

use crate::error::Result;
use crate::simulation::forces::{ForceSet, NewtonianGravity, NewtonianGravityPar};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Snapshot, System};

/// Runtime engine settings
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub parallel: bool, // false = serial force pass, true = rayon
}

impl Engine {
    /// Force set with Newtonian gravity for constant `g`
    fn gravity(&self, g: f64) -> ForceSet {
        if self.parallel {
            ForceSet::new().with(NewtonianGravityPar { g })
        } else {
            ForceSet::new().with(NewtonianGravity { g })
        }
    }
}

/// Handle for asking a running simulation to stop. Really just a `Arc<AtomicBool>`.
#[derive(Default, Debug, Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Request a stop. Takes effect at the next tick boundary.
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

pub struct Simulation {
    system: System,
    parameters: Parameters,
    forces: ForceSet,
    tick: u64,
    stop: StopHandle,
}

impl Simulation {
    /// Build a simulation over `bodies`, rejecting duplicate identities.
    /// Gravity always uses `parameters.g`, the same constant the energy
    /// diagnostics read.
    pub fn new(bodies: Vec<Body>, parameters: Parameters, engine: &Engine) -> Result<Self> {
        let forces = engine.gravity(parameters.g);
        let system = System::new(bodies);
        system.validate_identities()?;
        Ok(Self {
            system,
            parameters,
            forces,
            tick: 0,
            stop: StopHandle::new(),
        })
    }

    /// Simulation with serial Newtonian gravity using `parameters.g`.
    pub fn newtonian(bodies: Vec<Body>, parameters: Parameters) -> Result<Self> {
        Self::new(bodies, parameters, &Engine::default())
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Number of completed ticks
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self.tick, &self.system)
    }

    /// Whether a run should end before the next tick.
    fn halted(&self) -> bool {
        self.stop.is_stopped() || self.parameters.finished(self.system.t)
    }

    fn advance(&mut self) -> Result<()> {
        semi_implicit_euler(&mut self.system, &self.forces, &self.parameters)?;
        self.tick += 1;
        trace!(tick = self.tick, t = self.system.t, "tick complete");
        Ok(())
    }

    /// Perform one full tick and return the updated bodies.
    pub fn step(&mut self) -> Result<&[Body]> {
        self.advance()?;
        Ok(&self.system.bodies)
    }

    /// Step until stopped or `t_end` is reached, calling `on_tick` after each
    /// tick. Returns the number of ticks performed by this call.
    pub fn run<F>(&mut self, mut on_tick: F) -> Result<u64>
    where
        F: FnMut(&Simulation),
    {
        let start = self.tick;
        debug!(bodies = self.system.bodies.len(), dt = self.parameters.timestep, "run starting");
        while !self.halted() {
            self.advance()?;
            on_tick(&*self);
        }
        debug!(ticks = self.tick - start, t = self.system.t, "run finished");
        Ok(self.tick - start)
    }

    /// Consume the simulation as a sequence of per-tick snapshots.
    ///
    /// The sequence ends when stopped or at `t_end`. A failed tick is yielded
    /// once as `Err` and ends the sequence.
    pub fn ticks(self) -> Ticks {
        Ticks { sim: Some(self) }
    }
}

/// Iterator returned by [`Simulation::ticks`]
pub struct Ticks {
    sim: Option<Simulation>,
}

impl Iterator for Ticks {
    type Item = Result<Snapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        let sim = self.sim.as_mut()?;
        if sim.halted() {
            self.sim = None;
            return None;
        }
        if let Err(e) = sim.advance() {
            self.sim = None;
            return Some(Err(e));
        }
        Some(Ok(sim.snapshot()))
    }
}

impl FusedIterator for Ticks {}

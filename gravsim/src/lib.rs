pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;
pub mod logging;

pub use simulation::states::{Body, BodyState, System, Snapshot, NVec2};
pub use simulation::params::{Parameters, G, DAY};
pub use simulation::forces::{attraction, gravitational_force, ForceTerm, ForceSet, NewtonianGravity, NewtonianGravityPar};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::engine::{Engine, Simulation, StopHandle, Ticks};
pub use simulation::scenario::Scenario;
pub use simulation::units::{Scale, AU};

pub use configuration::config::{EngineConfig, ParametersConfig, DisplayConfig, BodyConfig, ScenarioConfig};

pub use error::{GravityError, Result};

pub use benchmark::benchmark::{bench_forces, bench_ticks};

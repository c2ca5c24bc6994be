//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – global engine options (serial or parallel force pass)
//! - [`ParametersConfig`] – timestep, gravitational constant and optional end time
//! - [`DisplayConfig`]    – display units per AU handed to the renderer
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario matching these types (SI units throughout):
//!
//! ```yaml
//! engine:
//!   parallel: false         # optional, rayon force pass when true
//!
//! parameters:
//!   timestep: 86400.0       # one day
//!   G: 6.67428e-11          # optional
//!   t_end: 31557600.0       # optional, run forever when absent
//!
//! display:
//!   scale_per_au: 100.0     # optional
//!
//! bodies:
//!   - name: sun
//!     m: 1.98892e30
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!   - name: earth
//!     m: 5.9742e24
//!     x: [ -1.496e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//! ```
//!
//! `Scenario::build_scenario` validates this into a runtime `Simulation`.

use serde::Deserialize;

use crate::simulation::params::G;

fn default_g() -> f64 {
    G
}

fn default_scale() -> f64 {
    100.0
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub parallel: bool, // `true` - net forces are computed on the rayon pool
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub timestep: f64, // time step size (s)
    #[serde(rename = "G", default = "default_g")]
    pub g: f64, // gravitational constant
    #[serde(default)]
    pub t_end: Option<f64>, // time end (s)
}

/// Rendering scale, never used by the physics
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_scale")]
    pub scale_per_au: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { scale_per_au: default_scale() }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String, // identity, unique within the scenario
    pub m: f64, // mass (kg)
    pub x: Vec<f64>, // initial position (m)
    #[serde(default)]
    pub v: Vec<f64>, // initial velocity (m/s), at rest when omitted
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    pub bodies: Vec<BodyConfig>,
}

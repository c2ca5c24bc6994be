//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size `timestep` (seconds),
//! - gravitational constant `g`,
//! - optional end time `t_end` after which a run stops

use crate::error::{GravityError, Result};

/// Gravitational constant (N m^2 / kg^2)
pub const G: f64 = 6.67428e-11;

/// One simulated day in seconds, the step used by the physical scenarios
pub const DAY: f64 = 24.0 * 3600.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub timestep: f64, // step size (s)
    pub g: f64, // gravitational constant
    pub t_end: Option<f64>, // stop once simulated time reaches this
}

impl Parameters {
    /// Parameters with the standard `G` and no end time.
    pub fn new(timestep: f64) -> Result<Self> {
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(GravityError::InvalidTimestep { timestep });
        }
        Ok(Self {
            timestep,
            g: G,
            t_end: None,
        })
    }

    /// One-day step, as used for the sun/planet scenarios.
    pub fn daily() -> Self {
        Self {
            timestep: DAY,
            g: G,
            t_end: None,
        }
    }

    /// Override the gravitational constant; must be finite and positive.
    pub fn with_g(mut self, g: f64) -> Result<Self> {
        if !(g.is_finite() && g > 0.0) {
            return Err(GravityError::InvalidG { g });
        }
        self.g = g;
        Ok(self)
    }

    pub fn with_t_end(mut self, t_end: Option<f64>) -> Self {
        self.t_end = t_end;
        self
    }

    /// Whether simulated time `t` has reached the configured end.
    pub fn finished(&self, t: f64) -> bool {
        self.t_end.map_or(false, |end| t >= end)
    }
}

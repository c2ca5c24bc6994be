//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - engine settings (`Engine`)
//! - display scale for the renderer (`Scale`)
//! - a validated `Simulation` at t = 0 with Newtonian gravity registered

use crate::configuration::config::{ScenarioConfig, BodyConfig};
use crate::error::{GravityError, Result};
use crate::simulation::engine::{Engine, Simulation};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};
use crate::simulation::units::Scale;

pub struct Scenario {
    pub engine: Engine,
    pub scale: Scale,
    pub simulation: Simulation,
}

/// Read a 2-component vector; an empty list means zero.
fn vec2(identity: &str, field: &'static str, values: &[f64], allow_empty: bool) -> Result<NVec2> {
    match values {
        [x, y] => Ok(NVec2::new(*x, *y)),
        [] if allow_empty => Ok(NVec2::zeros()),
        _ => Err(GravityError::InvalidVector {
            identity: identity.to_owned(),
            field,
            len: values.len(),
        }),
    }
}

fn build_body(bc: &BodyConfig) -> Result<Body> {
    let x = vec2(&bc.name, "x", &bc.x, false)?;
    let v = vec2(&bc.name, "v", &bc.v, true)?;
    Body::new(bc.name.clone(), bc.m, x, v)
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Bodies: map `BodyConfig` -> runtime `Body`, validating mass and vectors
        let bodies = cfg.bodies.iter().map(build_body).collect::<Result<Vec<Body>>>()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters::new(p_cfg.timestep)?
            .with_g(p_cfg.g)?
            .with_t_end(p_cfg.t_end);

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            parallel: cfg.engine.parallel,
        };

        let scale = Scale::new(cfg.display.scale_per_au)?;

        // Forces: Newtonian gravity from `parameters.g`, serial or rayon per engine
        let simulation = Simulation::new(bodies, parameters, &engine)?;

        Ok(Self {
            engine,
            scale,
            simulation,
        })
    }
}

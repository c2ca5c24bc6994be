//! Wall-clock timings for the brute-force force pass and full ticks.
//!
//! Bodies are laid out deterministically so runs are comparable.

use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::forces::{ForceTerm, NewtonianGravity, NewtonianGravityPar};
use crate::simulation::params::{Parameters, G};
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::units::AU;
use crate::error::Result;

/// `n` heavy bodies strung along the x axis with mixed velocities, the
/// same layout the many-body scenario uses.
pub fn line_of_bodies(n: usize) -> Result<Vec<Body>> {
    (0..n)
        .map(|i| {
            let x = NVec2::new(AU * (i as f64 / 25.0), 0.0);
            let v = NVec2::new(
                ((i % 4) as f64 - 2.0) * 500.0,
                ((i % 10) as f64 - 5.0) * 2000.0,
            );
            Body::new(i.to_string(), 1.0e26, x, v)
        })
        .collect()
}

pub fn bench_forces() -> Result<()> {
    // Different system sizes to test
    let ns = [20, 200, 800, 1600];

    for n in ns {
        let sys = System::new(line_of_bodies(n)?);
        let mut out = vec![NVec2::zeros(); n];

        let serial = NewtonianGravity { g: G };
        let par = NewtonianGravityPar { g: G };

        // Warm up
        serial.force(&sys, &mut out)?;
        par.force(&sys, &mut out)?;

        let t0 = Instant::now();
        serial.force(&sys, &mut out)?;
        let dt_serial = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        par.force(&sys, &mut out)?;
        let dt_par = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, serial = {:8.6} s, rayon = {:8.6} s", dt_serial, dt_par);
    }
    Ok(())
}

pub fn bench_ticks() -> Result<()> {
    let steps = 1000;

    for n in [2, 20, 100] {
        let mut sim = Simulation::newtonian(line_of_bodies(n)?, Parameters::daily())?;

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step()?;
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, {steps} ticks in {:8.6} s ({:.3e} s/tick)", elapsed, elapsed / steps as f64);
    }
    Ok(())
}

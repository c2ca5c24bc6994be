//! Fixed-step time integrator for the N-body system
//!
//! One tick is two passes over the whole system: all net forces are
//! computed from the unmodified state, then every body is kicked and drifted.

use super::states::{System, NVec2};
use super::forces::ForceSet;
use super::params::Parameters;
use crate::error::Result;

/// Advance the system by one step using semi-implicit (symplectic) Euler
///   v_n+1 = v_n + (F_n / m) dt
///   x_n+1 = x_n + v_n+1 dt
/// On error the system is left untouched.
pub fn semi_implicit_euler(sys: &mut System, forces: &ForceSet, params: &Parameters) -> Result<()> {
    let n = sys.bodies.len();
    let dt = params.timestep;

    // f[i] holds the net force on body i at time t_n, read from the
    // unmodified snapshot before anything is written
    let mut f = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&*sys, &mut f)?;

    for (b, f) in sys.bodies.iter_mut().zip(f.iter()) {
        // Kick: the position update below must see the new velocity
        let v = b.velocity() + (*f / b.mass()) * dt;
        b.set_velocity(v);

        // Drift
        b.set_position(b.position() + v * dt);
    }

    sys.t += dt;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::forces::NewtonianGravity;
    use crate::simulation::states::Body;
    use approx::assert_relative_eq;

    fn pair() -> System {
        System::new(vec![
            Body::at_rest("a", 1.0, NVec2::new(0.0, 0.0)).unwrap(),
            Body::at_rest("b", 1.0, NVec2::new(1.0, 0.0)).unwrap(),
        ])
    }

    #[test]
    fn position_uses_updated_velocity() {
        let mut sys = pair();
        let forces = ForceSet::new().with(NewtonianGravity { g: 1.0 });
        let params = Parameters::new(0.5).unwrap();

        semi_implicit_euler(&mut sys, &forces, &params).unwrap();

        // F = 1, v = 0.5, x = 0 + 0.5 * 0.5; explicit Euler would leave x at 0
        assert_relative_eq!(sys.bodies[0].velocity().x, 0.5, max_relative = 1e-12);
        assert_relative_eq!(sys.bodies[0].position().x, 0.25, max_relative = 1e-12);
        assert_relative_eq!(sys.bodies[1].position().x, 0.75, max_relative = 1e-12);
        assert_eq!(sys.t, 0.5);
    }

    #[test]
    fn failed_step_leaves_state_untouched() {
        let mut sys = System::new(vec![
            Body::new("a", 1.0, NVec2::new(0.0, 0.0), NVec2::new(1.0, 0.0)).unwrap(),
            Body::at_rest("b", 1.0, NVec2::new(2.0, 0.0)).unwrap(),
            Body::at_rest("c", 1.0, NVec2::new(2.0, 0.0)).unwrap(),
        ]);
        let forces = ForceSet::new().with(NewtonianGravity::default());
        let params = Parameters::new(1.0).unwrap();

        assert!(semi_implicit_euler(&mut sys, &forces, &params).is_err());
        assert_eq!(sys.bodies[0].position(), NVec2::zeros());
        assert_eq!(sys.bodies[0].velocity(), NVec2::new(1.0, 0.0));
        assert_eq!(sys.t, 0.0);
    }
}

//! Force contributors for the n-body engine
//!
//! Pairwise Newtonian attraction plus the net-force pass that sums it over
//! every ordered pair. The pass reads the system immutably and writes one
//! force per body into `out`, indexed like `sys.bodies`.

use rayon::prelude::*;

use crate::error::{GravityError, Result};
use crate::simulation::params::G;
use crate::simulation::states::{Body, NVec2, System};

/// Force exerted on `a` by `b`, using the standard `G`.
pub fn attraction(a: &Body, b: &Body) -> Result<NVec2> {
    gravitational_force(G, a, b)
}

/// Force exerted on `a` by `b` for gravitational constant `g`.
///
/// The magnitude `g m_a m_b / d^2` is decomposed with `atan2`/`cos`/`sin`
/// rather than by scaling the unit vector, so results agree with the
/// reference figures to the last few digits only.
pub fn gravitational_force(g: f64, a: &Body, b: &Body) -> Result<NVec2> {
    if std::ptr::eq(a, b) {
        return Err(GravityError::SelfAttraction {
            identity: a.identity().to_owned(),
        });
    }

    let dx = b.position().x - a.position().x;
    let dy = b.position().y - a.position().y;
    let d = (dx * dx + dy * dy).sqrt();
    if d == 0.0 {
        return Err(GravityError::Collision {
            a: a.identity().to_owned(),
            b: b.identity().to_owned(),
        });
    }

    let f = g * a.mass() * b.mass() / (d * d);
    let theta = dy.atan2(dx);
    let force = NVec2::new(f * theta.cos(), f * theta.sin());
    // d * d can underflow to zero, or the product overflow, for d > 0
    if !force.iter().all(|c| c.is_finite()) {
        return Err(GravityError::NonFiniteForce {
            a: a.identity().to_owned(),
            b: b.identity().to_owned(),
        });
    }
    Ok(force)
}

/// Net force on body `i` from every other body in `bodies`.
fn net_force_on(g: f64, bodies: &[Body], i: usize) -> Result<NVec2> {
    let bi = &bodies[i];
    let mut total = NVec2::zeros();
    for (j, bj) in bodies.iter().enumerate() {
        if i == j {
            continue;
        }
        total += gravitational_force(g, bi, bj)?;
    }
    Ok(total)
}

/// Collection of force terms.
/// Each term implements [`ForceTerm`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn ForceTerm + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceTerm + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute net forces for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec2]) -> Result<()> {
        debug_assert_eq!(sys.bodies.len(), out.len());
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(sys, out)?;
        }
        Ok(())
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait ForceTerm {
    fn force(&self, sys: &System, out: &mut [NVec2]) -> Result<()>;
}

/// Direct O(n^2) Newtonian gravity, evaluated for every ordered pair.
pub struct NewtonianGravity {
    pub g: f64,
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { g: G }
    }
}

impl ForceTerm for NewtonianGravity {
    fn force(&self, sys: &System, out: &mut [NVec2]) -> Result<()> {
        for (i, f) in out.iter_mut().enumerate() {
            *f += net_force_on(self.g, &sys.bodies, i)?;
        }
        Ok(())
    }
}

/// Same sum as [`NewtonianGravity`], with each body's net force computed on
/// the rayon pool. Summation order per body is unchanged, so results match
/// the serial term exactly.
pub struct NewtonianGravityPar {
    pub g: f64,
}

impl Default for NewtonianGravityPar {
    fn default() -> Self {
        Self { g: G }
    }
}

impl ForceTerm for NewtonianGravityPar {
    fn force(&self, sys: &System, out: &mut [NVec2]) -> Result<()> {
        out.par_iter_mut().enumerate().try_for_each(|(i, f)| {
            *f += net_force_on(self.g, &sys.bodies, i)?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit(id: &str, x: f64, y: f64) -> Body {
        Body::at_rest(id, 1.0, NVec2::new(x, y)).unwrap()
    }

    #[test]
    fn self_attraction_is_an_error() {
        let a = unit("a", 0.0, 0.0);
        assert_eq!(
            attraction(&a, &a),
            Err(GravityError::SelfAttraction { identity: "a".into() })
        );
    }

    #[test]
    fn distinct_bodies_with_equal_state_collide() {
        let a = unit("a", 3.0, 4.0);
        let b = a.clone();
        assert!(matches!(attraction(&a, &b), Err(GravityError::Collision { .. })));
    }

    #[test]
    fn tiny_separation_is_not_an_infinite_force() {
        let a = unit("a", 0.0, 0.0);
        let b = unit("b", 1.0e-160, 0.0);
        assert_eq!(
            gravitational_force(1.0, &a, &b),
            Err(GravityError::NonFiniteForce { a: "a".into(), b: "b".into() })
        );
    }

    #[test]
    fn magnitude_scales_with_masses() {
        let a = Body::at_rest("a", 2.0, NVec2::new(0.0, 0.0)).unwrap();
        let b = Body::at_rest("b", 3.0, NVec2::new(0.0, -10.0)).unwrap();
        let f = gravitational_force(1.0, &a, &b).unwrap();
        assert_relative_eq!(f.norm(), 6.0 / 100.0, max_relative = 1e-12);
        assert!(f.y < 0.0);
        assert!(f.x.abs() < 1e-15);
    }

    #[test]
    fn force_set_sums_terms() {
        let sys = System::new(vec![unit("a", 0.0, 0.0), unit("b", 1.0, 0.0)]);
        let forces = ForceSet::new()
            .with(NewtonianGravity { g: 1.0 })
            .with(NewtonianGravity { g: 2.0 });
        let mut out = vec![NVec2::zeros(); 2];
        forces.accumulate_forces(&sys, &mut out).unwrap();
        assert_relative_eq!(out[0].x, 3.0, max_relative = 1e-12);
        assert_relative_eq!(out[1].x, -3.0, max_relative = 1e-12);
    }

    #[test]
    fn empty_force_set_zeroes_output() {
        let sys = System::new(vec![unit("a", 0.0, 0.0)]);
        let mut out = vec![NVec2::new(5.0, 5.0)];
        ForceSet::new().accumulate_forces(&sys, &mut out).unwrap();
        assert_eq!(out[0], NVec2::zeros());
    }

    #[test]
    fn collision_in_net_force_pass() {
        let sys = System::new(vec![unit("a", 1.0, 1.0), unit("b", 5.0, 0.0), unit("c", 1.0, 1.0)]);
        let mut out = vec![NVec2::zeros(); 3];
        let err = NewtonianGravity::default().force(&sys, &mut out).unwrap_err();
        assert_eq!(err, GravityError::Collision { a: "a".into(), b: "c".into() });
    }
}

//! Core state types for the N-body simulation.
//!
//! - `Body`     a validated point mass (identity, mass, position, velocity)
//! - `System`   the ordered list of bodies and the current simulated time `t`
//! - `Snapshot` an owned, read-only copy of the system handed to renderers
//!
//! All quantities are SI: kilograms, meters, meters/second, seconds.

use nalgebra::Vector2;

use crate::error::{GravityError, Result};

pub type NVec2 = Vector2<f64>;

/// A point mass in the 2D inertial frame.
///
/// Mass is fixed at construction. Position and velocity are only changed by
/// the integrator, once per tick.
#[derive(Debug, Clone)]
pub struct Body {
    identity: String, // diagnostic label, unique within a simulation
    m: f64, // mass (kg)
    x: NVec2, // position (m)
    v: NVec2, // velocity (m/s)
}

impl Body {
    /// Construct a body, rejecting mass that is zero, negative or not finite,
    /// and non-finite position or velocity.
    pub fn new(identity: impl Into<String>, mass: f64, position: NVec2, velocity: NVec2) -> Result<Self> {
        let identity = identity.into();
        if !(mass.is_finite() && mass > 0.0) {
            return Err(GravityError::InvalidMass { identity, mass });
        }
        for (field, value) in [("x", &position), ("v", &velocity)] {
            if !value.iter().all(|c| c.is_finite()) {
                return Err(GravityError::NonFiniteState { identity, field });
            }
        }
        Ok(Self {
            identity,
            m: mass,
            x: position,
            v: velocity,
        })
    }

    /// Body at `position` with zero velocity.
    pub fn at_rest(identity: impl Into<String>, mass: f64, position: NVec2) -> Result<Self> {
        Self::new(identity, mass, position, NVec2::zeros())
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn set_position(&mut self, position: NVec2) {
        self.x = position;
    }

    pub fn set_velocity(&mut self, velocity: NVec2) {
        self.v = velocity;
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    /// Kinetic energy 1/2 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// Owned copy of the renderer-facing state.
    pub fn state(&self) -> BodyState {
        BodyState {
            identity: self.identity.clone(),
            position: self.x,
            velocity: self.v,
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection, stable across a tick
    pub t: f64, // simulated time (s)
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Check that every identity appears at most once.
    pub fn validate_identities(&self) -> Result<()> {
        for (i, b) in self.bodies.iter().enumerate() {
            if self.bodies[..i].iter().any(|other| other.identity == b.identity) {
                return Err(GravityError::DuplicateIdentity {
                    identity: b.identity.clone(),
                });
            }
        }
        Ok(())
    }

    /// Total linear momentum of the system
    pub fn momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Gravitational potential energy, -G m_i m_j / r_ij summed over unordered pairs.
    /// Coincident pairs are skipped; the force pass reports those as collisions.
    pub fn potential_energy(&self, g: f64) -> f64 {
        let n = self.bodies.len();
        let mut total = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let (bi, bj) = (&self.bodies[i], &self.bodies[j]);
                let r = (bj.x - bi.x).norm();
                if r > 0.0 {
                    total -= g * bi.m * bj.m / r;
                }
            }
        }
        total
    }

    pub fn total_energy(&self, g: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(g)
    }
}

/// Renderer-facing view of one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub identity: String,
    pub position: NVec2,
    pub velocity: NVec2,
}

/// State of every body after a completed tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tick: u64, // number of completed ticks
    pub t: f64, // simulated time (s)
    pub bodies: Vec<BodyState>,
}

impl Snapshot {
    pub fn of(tick: u64, sys: &System) -> Self {
        Self {
            tick,
            t: sys.t,
            bodies: sys.bodies.iter().map(Body::state).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_non_positive_mass() {
        for mass in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Body::at_rest("bad", mass, NVec2::zeros()).unwrap_err();
            assert!(matches!(err, GravityError::InvalidMass { ref identity, .. } if identity == "bad"));
        }
    }

    #[test]
    fn rejects_non_finite_state() {
        let err = Body::at_rest("p", 1.0, NVec2::new(f64::NAN, 0.0)).unwrap_err();
        assert_eq!(err, GravityError::NonFiniteState { identity: "p".into(), field: "x" });
        let err = Body::new("p", 1.0, NVec2::zeros(), NVec2::new(0.0, f64::INFINITY)).unwrap_err();
        assert_eq!(err, GravityError::NonFiniteState { identity: "p".into(), field: "v" });
    }

    #[test]
    fn accessors_round_trip() {
        let mut b = Body::new("earth", 5.9742e24, NVec2::new(1.0, 2.0), NVec2::new(3.0, 4.0)).unwrap();
        assert_eq!(b.identity(), "earth");
        assert_eq!(b.mass(), 5.9742e24);
        b.set_position(NVec2::new(-1.0, 0.5));
        b.set_velocity(NVec2::new(0.0, 7.0));
        assert_eq!(b.position(), NVec2::new(-1.0, 0.5));
        assert_eq!(b.velocity(), NVec2::new(0.0, 7.0));
    }

    #[test]
    fn duplicate_identities_are_rejected() {
        let sys = System::new(vec![
            Body::at_rest("a", 1.0, NVec2::new(0.0, 0.0)).unwrap(),
            Body::at_rest("b", 1.0, NVec2::new(1.0, 0.0)).unwrap(),
            Body::at_rest("a", 1.0, NVec2::new(2.0, 0.0)).unwrap(),
        ]);
        assert_eq!(
            sys.validate_identities(),
            Err(GravityError::DuplicateIdentity { identity: "a".into() })
        );
    }

    #[test]
    fn energy_of_two_bodies() {
        let sys = System::new(vec![
            Body::new("a", 2.0, NVec2::new(0.0, 0.0), NVec2::new(1.0, 0.0)).unwrap(),
            Body::new("b", 3.0, NVec2::new(0.0, 2.0), NVec2::new(0.0, -2.0)).unwrap(),
        ]);
        assert_relative_eq!(sys.kinetic_energy(), 1.0 + 6.0);
        assert_relative_eq!(sys.potential_energy(0.5), -0.5 * 6.0 / 2.0);
        assert_relative_eq!(sys.momentum(), NVec2::new(2.0, -6.0));
    }

    #[test]
    fn snapshot_copies_state() {
        let mut sys = System::new(vec![Body::at_rest("sun", 1.0, NVec2::new(1.0, 1.0)).unwrap()]);
        sys.t = 86400.0;
        let snap = Snapshot::of(1, &sys);
        sys.bodies[0].set_position(NVec2::zeros());
        assert_eq!(snap.tick, 1);
        assert_eq!(snap.t, 86400.0);
        assert_eq!(snap.bodies[0].identity, "sun");
        assert_eq!(snap.bodies[0].position, NVec2::new(1.0, 1.0));
    }
}

//! Error types for the gravity engine.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GravityError {
    #[error("body `{identity}` cannot attract itself")]
    SelfAttraction { identity: String },

    #[error("bodies `{a}` and `{b}` occupy the same position")]
    Collision { a: String, b: String },

    #[error("body `{identity}` has invalid mass {mass} (must be finite and positive)")]
    InvalidMass { identity: String, mass: f64 },

    #[error("body `{identity}`: `{field}` must be finite")]
    NonFiniteState {
        identity: String,
        field: &'static str,
    },

    #[error("force between `{a}` and `{b}` is not finite")]
    NonFiniteForce { a: String, b: String },

    #[error("identity `{identity}` is used by more than one body")]
    DuplicateIdentity { identity: String },

    #[error("body `{identity}`: `{field}` must have 2 components, got {len}")]
    InvalidVector {
        identity: String,
        field: &'static str,
        len: usize,
    },

    #[error("invalid timestep {timestep} (must be finite and positive)")]
    InvalidTimestep { timestep: f64 },

    #[error("invalid gravitational constant {g} (must be finite and positive)")]
    InvalidG { g: f64 },

    #[error("invalid display scale {scale} (must be finite and positive)")]
    InvalidScale { scale: f64 },
}

pub type Result<T> = std::result::Result<T, GravityError>;

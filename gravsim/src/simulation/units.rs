//! Physical-to-display scaling.
//!
//! The engine stores meters. A renderer asks a `Scale` for display
//! coordinates; the conversion is pure and never touches body state.

use crate::error::{GravityError, Result};
use crate::simulation::states::NVec2;

/// Astronomical unit in meters (149.6 million km)
pub const AU: f64 = 149.6e6 * 1000.0;

/// Display units per astronomical unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    per_au: f64,
}

impl Scale {
    /// 100 display units per AU, inner planets fill the view
    pub const CLOSE: Scale = Scale { per_au: 100.0 };
    /// 250 display units per AU
    pub const WIDE: Scale = Scale { per_au: 250.0 };

    pub fn new(per_au: f64) -> Result<Self> {
        if !(per_au.is_finite() && per_au > 0.0) {
            return Err(GravityError::InvalidScale { scale: per_au });
        }
        Ok(Self { per_au })
    }

    pub fn per_au(&self) -> f64 {
        self.per_au
    }

    /// Display units per meter
    pub fn factor(&self) -> f64 {
        self.per_au / AU
    }

    pub fn to_display(&self, physical: NVec2) -> NVec2 {
        physical * self.factor()
    }

    pub fn to_physical(&self, display: NVec2) -> NVec2 {
        display / self.factor()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::CLOSE
    }
}

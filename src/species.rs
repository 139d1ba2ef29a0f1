// file: `src/species.rs`
use crate::error::GcmcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chemical species supported by the simulator.
///
/// The noble gases are plain Lennard-Jones fluids; `Water` is only meaningful
/// as a Stockmeyer fluid and is written as oxygen in trajectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Ar,
    He,
    Ne,
    Kr,
    Xe,
    Water,
}

/// Lennard-Jones parameters of a species
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesParameters {
    /// Collision diameter σ (Å)
    pub sigma: f64,
    /// Well depth ε/k_B (K)
    pub epsilon: f64,
    /// Particle mass (AMU)
    pub mass: f64,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::Ar,
        Species::He,
        Species::Ne,
        Species::Kr,
        Species::Xe,
        Species::Water,
    ];

    pub fn parameters(&self) -> SpeciesParameters {
        let (sigma, epsilon, mass) = match self {
            Species::Ar => (3.371914, 128.326802, 39.948),
            Species::He => (2.653089, 9.071224, 4.0026),
            Species::Ne => (2.785823, 36.824138, 20.1797),
            Species::Kr => (3.601271, 183.795833, 83.798),
            Species::Xe => (3.956802, 237.985247, 131.293),
            Species::Water => (3.15100, 76.42000, 18.016),
        };
        SpeciesParameters {
            sigma,
            epsilon,
            mass,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Species::Ar => "Ar",
            Species::He => "He",
            Species::Ne => "Ne",
            Species::Kr => "Kr",
            Species::Xe => "Xe",
            Species::Water => "Water",
        }
    }

    /// Element label used in XYZ trajectory frames
    pub fn trajectory_label(&self) -> &'static str {
        match self {
            Species::Water => "O",
            other => other.symbol(),
        }
    }
}

impl FromStr for Species {
    type Err = GcmcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .iter()
            .copied()
            .find(|species| species.symbol() == s)
            .ok_or_else(|| GcmcError::UnknownSpecies(s.to_string()))
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

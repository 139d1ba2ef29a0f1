// Grand canonical Monte Carlo for Lennard-Jones fluids

pub mod app;
pub mod config;
pub mod error;
pub mod gcmc;
pub mod io;
pub mod lj_pot;
pub mod pbc;
pub mod rdf;
pub mod species;

pub use error::GcmcError;
pub use gcmc::{AcceptanceCriterion, Gcmc, GcmcStatistics, MoveType, PendingMove, StepOutcome};
pub use lj_pot::LennardJones;
pub use pbc::SimulationBox;
pub use rdf::RadialDistribution;
pub use species::{Species, SpeciesParameters};

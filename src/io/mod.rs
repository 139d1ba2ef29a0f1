//! Input/Output operations for GCMC runs
//!
//! This module handles logging setup and the plain-text output files.

mod output;
mod trajectory;

pub use output::setup_output;
pub use trajectory::{
    write_radial_distribution, TrajectoryWriter, ENERGY_FILE, POSITIONS_FILE,
    UNWEIGHTED_RDF_FILE, WEIGHTED_RDF_FILE,
};

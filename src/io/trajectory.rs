//! Trajectory, energy and radial distribution files
//!
//! Every file is opened in append mode so consecutive runs in the same
//! directory extend the previous output.

use crate::error::GcmcError;
use crate::rdf::RdfBin;
use crate::species::Species;
use nalgebra::Vector3;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub const POSITIONS_FILE: &str = "positions.xyz";
pub const ENERGY_FILE: &str = "energies.dat";
pub const UNWEIGHTED_RDF_FILE: &str = "unweightedradialdistribution.txt";
pub const WEIGHTED_RDF_FILE: &str = "weightedradialdistribution.txt";

fn open_append(path: &Path) -> Result<BufWriter<File>, GcmcError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(BufWriter::new)
        .map_err(|err| GcmcError::io(path, err))
}

/// Writes one XYZ frame and one energy line per step
pub struct TrajectoryWriter<W: Write> {
    label: &'static str,
    positions: W,
    energies: W,
}

impl TrajectoryWriter<BufWriter<File>> {
    /// Open `positions.xyz` and `energies.dat` inside `dir`
    pub fn create(dir: &Path, species: Species) -> Result<Self, GcmcError> {
        let positions = open_append(&dir.join(POSITIONS_FILE))?;
        let energies = open_append(&dir.join(ENERGY_FILE))?;
        Ok(Self::new(species, positions, energies))
    }
}

impl<W: Write> TrajectoryWriter<W> {
    pub fn new(species: Species, positions: W, energies: W) -> Self {
        Self {
            label: species.trajectory_label(),
            positions,
            energies,
        }
    }

    /// Append the state after `step`. An empty box gets no XYZ frame.
    pub fn record(
        &mut self,
        step: u64,
        energy: f64,
        positions: &[Vector3<f64>],
    ) -> std::io::Result<()> {
        if !positions.is_empty() {
            writeln!(self.positions, "{} \n", positions.len())?;
            for p in positions {
                writeln!(
                    self.positions,
                    "{} {:.6} {:.6} {:.6}",
                    self.label, p.x, p.y, p.z
                )?;
            }
        }
        // unlike the frame, the energy line is written for an empty box too
        writeln!(self.energies, "{} {:.6}", step, energy)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.positions.flush()?;
        self.energies.flush()
    }

    pub fn into_inner(self) -> (W, W) {
        (self.positions, self.energies)
    }
}

fn write_series<W: Write>(
    writer: &mut W,
    bins: &[RdfBin],
    value: impl Fn(&RdfBin) -> f64,
) -> std::io::Result<()> {
    for bin in bins {
        writeln!(writer, "{:.6}     {:.6}", bin.r, value(bin))?;
    }
    writer.flush()
}

/// Append the unweighted and weighted distributions to their files in `dir`
pub fn write_radial_distribution(dir: &Path, bins: &[RdfBin]) -> Result<(), GcmcError> {
    let unweighted_path = dir.join(UNWEIGHTED_RDF_FILE);
    let mut unweighted = open_append(&unweighted_path)?;
    write_series(&mut unweighted, bins, |b| b.unweighted)
        .map_err(|err| GcmcError::io(&unweighted_path, err))?;

    let weighted_path = dir.join(WEIGHTED_RDF_FILE);
    let mut weighted = open_append(&weighted_path)?;
    write_series(&mut weighted, bins, |b| b.weighted)
        .map_err(|err| GcmcError::io(&weighted_path, err))?;

    Ok(())
}

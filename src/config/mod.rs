//! Configuration management for GCMC runs
//!
//! This module handles the YAML configuration, its defaults, command-line
//! overrides and validation.

mod args;

pub use args::Args;

use crate::error::GcmcError;
use crate::species::Species;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for a GCMC run
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    pub species: Option<String>,
    /// Temperature (K)
    pub temperature: Option<f64>,
    /// Cubic box side length (Å)
    pub box_length: Option<f64>,
    pub steps: Option<usize>,
    /// Random seed; a fresh entropy seed is used when absent
    pub seed: Option<u64>,
    pub output_dir: Option<String>,
    /// Steps between progress log lines
    pub log_interval: Option<usize>,
    /// Boltzmann constant in energy units per Kelvin
    pub k_boltzmann: Option<f64>,
    pub rdf: Option<RdfParams>,
}

/// Radial distribution histogram parameters
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RdfParams {
    pub n_bins: Option<usize>,
    /// Shell width (Å)
    pub bin_size: Option<f64>,
}

impl Default for RdfParams {
    fn default() -> Self {
        RdfParams {
            n_bins: Some(150),
            bin_size: Some(0.1),
        }
    }
}

impl RdfParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.n_bins.is_none() {
            self.n_bins = defaults.n_bins;
        }
        if self.bin_size.is_none() {
            self.bin_size = defaults.bin_size;
        }
        self
    }
}

const DEFAULT_SPECIES: &str = "Ar";
const DEFAULT_TEMPERATURE: f64 = 300.0;
const DEFAULT_BOX_LENGTH: f64 = 30.0;
const DEFAULT_STEPS: usize = 10_000;
const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_LOG_INTERVAL: usize = 1000;
const DEFAULT_K_BOLTZMANN: f64 = 1.0;

impl Config {
    /// Parse a YAML document and fill in defaults
    pub fn from_yaml(content: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str::<Config>(content).map(Config::with_defaults)
    }

    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        if self.species.is_none() {
            self.species = Some(DEFAULT_SPECIES.to_string());
        }
        if self.temperature.is_none() {
            self.temperature = Some(DEFAULT_TEMPERATURE);
        }
        if self.box_length.is_none() {
            self.box_length = Some(DEFAULT_BOX_LENGTH);
        }
        if self.steps.is_none() {
            self.steps = Some(DEFAULT_STEPS);
        }
        if self.output_dir.is_none() {
            self.output_dir = Some(DEFAULT_OUTPUT_DIR.to_string());
        }
        if self.log_interval.is_none() {
            self.log_interval = Some(DEFAULT_LOG_INTERVAL);
        }
        if self.k_boltzmann.is_none() {
            self.k_boltzmann = Some(DEFAULT_K_BOLTZMANN);
        }
        self.rdf = Some(self.rdf.take().unwrap_or_default().with_defaults());
        self
    }

    /// Command-line values take precedence over the file
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(species) = &args.species {
            self.species = Some(species.clone());
        }
        self.temperature = args.temperature.or(self.temperature);
        self.box_length = args.box_length.or(self.box_length);
        self.steps = args.steps.or(self.steps);
        self.seed = args.seed.or(self.seed);
        if let Some(dir) = &args.output_dir {
            self.output_dir = Some(dir.clone());
        }
        self
    }

    pub fn species(&self) -> Result<Species, GcmcError> {
        self.species.as_deref().unwrap_or(DEFAULT_SPECIES).parse()
    }

    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn box_length(&self) -> f64 {
        self.box_length.unwrap_or(DEFAULT_BOX_LENGTH)
    }

    pub fn steps(&self) -> usize {
        self.steps.unwrap_or(DEFAULT_STEPS)
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval.unwrap_or(DEFAULT_LOG_INTERVAL)
    }

    pub fn k_boltzmann(&self) -> f64 {
        self.k_boltzmann.unwrap_or(DEFAULT_K_BOLTZMANN)
    }

    pub fn rdf_n_bins(&self) -> usize {
        self.rdf.as_ref().and_then(|r| r.n_bins).unwrap_or(150)
    }

    pub fn rdf_bin_size(&self) -> f64 {
        self.rdf.as_ref().and_then(|r| r.bin_size).unwrap_or(0.1)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), GcmcError> {
        self.species()?;

        if self.temperature() <= 0.0 {
            return Err(invalid("Temperature must be positive"));
        }
        if self.box_length() <= 0.0 {
            return Err(invalid("Box length must be positive"));
        }
        if self.steps() == 0 {
            return Err(invalid("Total steps must be positive"));
        }
        if self.log_interval() == 0 {
            return Err(invalid("Log interval must be positive"));
        }
        if self.k_boltzmann() <= 0.0 {
            return Err(invalid("Boltzmann constant must be positive"));
        }
        if self.rdf_n_bins() == 0 {
            return Err(invalid("RDF bin count must be positive"));
        }
        if self.rdf_bin_size() <= 0.0 {
            return Err(invalid("RDF bin size must be positive"));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> GcmcError {
    GcmcError::InvalidConfig(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gets_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.species().unwrap(), Species::Ar);
        assert_eq!(config.temperature(), 300.0);
        assert_eq!(config.box_length(), 30.0);
        assert_eq!(config.steps(), 10_000);
        assert_eq!(config.seed, None);
        assert_eq!(config.output_dir(), PathBuf::from("."));
        assert_eq!(config.rdf_n_bins(), 150);
        assert_eq!(config.rdf_bin_size(), 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_values_are_kept() {
        let yaml = r#"
species: Xe
temperature: 250.0
box_length: 40.0
steps: 500
seed: 7
rdf:
  bin_size: 0.25
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.species().unwrap(), Species::Xe);
        assert_eq!(config.temperature(), 250.0);
        assert_eq!(config.box_length(), 40.0);
        assert_eq!(config.steps(), 500);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.rdf_bin_size(), 0.25);
        assert_eq!(config.rdf_n_bins(), 150);
    }

    #[test]
    fn test_args_override_file() {
        let config = Config::from_yaml("species: Ne\nsteps: 100\nseed: 1\n").unwrap();
        let args = Args {
            species: Some("Kr".to_string()),
            steps: Some(20),
            output_dir: Some("out".to_string()),
            ..Default::default()
        };
        let config = config.apply_args(&args);
        assert_eq!(config.species().unwrap(), Species::Kr);
        assert_eq!(config.steps(), 20);
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.output_dir(), PathBuf::from("out"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default().with_defaults();
        assert!(config.validate().is_ok());

        config.temperature = Some(-10.0);
        assert!(matches!(config.validate(), Err(GcmcError::InvalidConfig(_))));
        config.temperature = Some(300.0);

        config.steps = Some(0);
        assert!(config.validate().is_err());
        config.steps = Some(10);

        config.rdf = Some(RdfParams {
            n_bins: Some(10),
            bin_size: Some(0.0),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_species_fails_validation() {
        let config = Config::from_yaml("species: Unobtainium\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(GcmcError::UnknownSpecies(ref name)) if name == "Unobtainium"
        ));
    }

    #[test]
    fn test_yaml_serialization() {
        let config = Config::default().with_defaults();
        let yaml = serde_yml::to_string(&config).unwrap();
        let deserialized = Config::from_yaml(&yaml).unwrap();
        assert_eq!(deserialized, config);
    }
}

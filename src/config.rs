use std::{io, fs};
use std::io::Read;
use std::path::Path;
use serde::Deserialize;
use crate::error::ProverError;
use crate::prover::RuleSet;
use crate::sequent::DisplayOrder;

pub const CONFIG_FILE_PATH: &'static str = "prover.toml";

/// Settings for a proof request, every key optional
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProverConfig {
    /// which table the normalizer expands connectives with
    pub cnf_rules: RuleSet,
    pub trace_order: DisplayOrder,
    /// whether the resolution derivation is printed
    pub show_refutation: bool,
    /// whether the sequent trace is printed
    pub show_trace: bool,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            cnf_rules: RuleSet::default(),
            trace_order: DisplayOrder::default(),
            show_refutation: true,
            show_trace: true,
        }
    }
}

impl ProverConfig {
    /// Read the config at `path`. A missing file gives the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ProverConfig, ProverError> {
        let path = path.as_ref();
        let mut file = match fs::File::open(path) {
            Ok(file) => file,
            Err(why) if why.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(ProverConfig::default());
            }
            Err(why) => return Err(ProverError::Config(format!("{}: {}", path.display(), why))),
        };
        let mut buf = String::new();
        file.read_to_string(&mut buf)
            .map_err(|why| ProverError::Config(format!("{}: {}", path.display(), why)))?;
        ProverConfig::from_str(buf.as_str())
    }
    pub fn from_str(source: &str) -> Result<ProverConfig, ProverError> {
        let config = toml::from_str(source)
            .map_err(|why| ProverError::Config(why.to_string()))?;
        debug!("loaded config {:?}", config);
        Ok(config)
    }
}

#[macro_use]
pub mod error;
#[macro_use]
pub mod prover;
pub mod ast;
pub mod sequent;
pub mod config;

#[macro_use] extern crate log;

pub use ast::{parse, tokenize, Formula};
pub use config::ProverConfig;
pub use error::{BoxedErrorTrait, ProverError};
pub use prover::{find_proof, normalize, normalize_with, resolve, resolve_with, Refutation, RuleSet};
pub use sequent::{prove, DisplayOrder, ProofTrace};

/// Search for a refutation of `not goal` with the default rules
pub fn refute(goal: &Formula) -> Result<Refutation, ProverError> {
    find_proof(goal, RuleSet::default())
}

/// The outcome of running both provers on one formula
#[derive(Debug, Clone)]
pub struct ProofReport {
    pub formula: Formula,
    pub refutation: Refutation,
    pub trace: ProofTrace,
}

impl ProofReport {
    pub fn is_theorem(&self) -> bool {
        self.refutation.theorem
    }
}

/// Parse the source, decide it by resolution and build its sequent trace
pub fn service_proof_request(source: &str, config: &ProverConfig) -> Result<ProofReport, ProverError> {
    let formula = ast::parse(source)?;
    let refutation = find_proof(&formula, config.cnf_rules)?;
    let trace = prove(&formula)?;
    info!("{} is {}a theorem", formula, if refutation.theorem { "" } else { "not " });
    Ok( ProofReport { formula, refutation, trace } )
}

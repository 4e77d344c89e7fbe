extern crate pretty_env_logger;
#[macro_use] extern crate log;

use std::process;
use sequent_prover::{service_proof_request, BoxedErrorTrait, ProverConfig};
use sequent_prover::config::CONFIG_FILE_PATH;

fn run() -> Result<(), BoxedErrorTrait> {
    let source = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if source.trim().is_empty() {
        return Err("usage: sequent-prover <formula>, e.g. `sequent-prover \"P => P.\"`".into());
    }
    let config = ProverConfig::load(CONFIG_FILE_PATH)?;
    let report = service_proof_request(source.as_str(), &config)?;

    if report.is_theorem() {
        println!("{} is a theorem", report.formula);
    } else {
        println!("{} is not a theorem", report.formula);
    }
    if config.show_refutation {
        println!();
        println!("resolution refutation:");
        println!("{}", report.refutation);
    }
    if config.show_trace {
        println!();
        println!("sequent trace:");
        print!("{}", report.trace.render(config.trace_order));
    }
    Ok( () )
}

fn main() {
    pretty_env_logger::init();
    if let Err(why) = run() {
        error!("{}", why);
        eprintln!("{}", why);
        process::exit(1);
    }
}

//! Batch command implementation
//!
//! Reads contracts from a CSV file with header
//! `spot,strike,rate,volatility,term` and evaluates them in parallel.

use std::io::Read;
use std::path::Path;

use pricer_analytic::{evaluate_batch, ContractParams, OptionContract};
use tracing::info;

use crate::config::CliConfig;
use crate::output::{render, Report};
use crate::{CliError, Result};

/// Run the batch command
pub fn run(config: &CliConfig, input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }

    info!(input = %input.display(), format = %config.format, "Starting batch evaluation");

    let file = std::fs::File::open(input)?;
    let contracts = read_contracts(file)?;
    let output = render_batch(config, &contracts)?;
    println!("{}", output);

    info!(contracts = contracts.len(), "Batch evaluation complete");
    Ok(())
}

/// Parses and validates every row; the first invalid row aborts the batch.
fn read_contracts<R: Read>(reader: R) -> Result<Vec<OptionContract>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut contracts = Vec::new();
    for (index, record) in csv_reader.deserialize::<ContractParams>().enumerate() {
        let params = record?;
        let contract = OptionContract::try_from(params).map_err(|source| CliError::InvalidRow {
            row: index + 1,
            source,
        })?;
        contracts.push(contract);
    }
    Ok(contracts)
}

fn render_batch(config: &CliConfig, contracts: &[OptionContract]) -> Result<String> {
    let reports: Vec<Report> = contracts
        .iter()
        .zip(evaluate_batch(contracts))
        .map(|(contract, evaluation)| Report::new(*contract, evaluation, None))
        .collect();
    render(&reports, config.format)
}

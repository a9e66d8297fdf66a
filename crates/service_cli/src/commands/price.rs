//! Price command implementation
//!
//! Prices a single contract. Parameters not given on the command line are
//! taken from the configured default contract.

use pricer_analytic::{BlackScholes, ContractParams, OptionContract, OptionType};
use tracing::info;

use crate::config::CliConfig;
use crate::output::{render, Report};
use crate::Result;

/// Contract parameters supplied on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceArgs {
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
    pub term: Option<f64>,
    pub option_type: Option<OptionType>,
}

impl PriceArgs {
    /// Fills missing parameters from `defaults`.
    fn resolve(&self, defaults: ContractParams) -> ContractParams {
        ContractParams {
            spot: self.spot.unwrap_or(defaults.spot),
            strike: self.strike.unwrap_or(defaults.strike),
            rate: self.rate.unwrap_or(defaults.rate),
            volatility: self.volatility.unwrap_or(defaults.volatility),
            term: self.term.unwrap_or(defaults.term),
        }
    }
}

/// Run the price command
pub fn run(config: &CliConfig, args: &PriceArgs) -> Result<()> {
    let output = render_price(config, args)?;
    println!("{}", output);
    Ok(())
}

fn render_price(config: &CliConfig, args: &PriceArgs) -> Result<String> {
    let params = args.resolve(config.contract.into());
    let contract = OptionContract::try_from(params)?;

    info!(
        spot = contract.spot(),
        strike = contract.strike(),
        rate = contract.rate(),
        volatility = contract.volatility(),
        term = contract.term(),
        "Pricing contract"
    );

    let evaluation = BlackScholes::new(contract).evaluate();
    let report = Report::new(contract, evaluation, args.option_type);
    render(&[report], config.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::CliError;

    #[test]
    fn test_defaults_price_example_contract() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let json = render_price(&config, &PriceArgs::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["call"]["price"], 8.65);
        assert_eq!(value["put"]["price"], 585.66);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let args = PriceArgs {
            spot: Some(100.0),
            strike: Some(100.0),
            rate: Some(0.05),
            volatility: Some(0.2),
            term: Some(1.0),
            option_type: Some(OptionType::Call),
        };
        let json = render_price(&config, &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["call"]["price"], 10.45);
        assert!(value.get("put").is_none());
    }

    #[test]
    fn test_invalid_flag_rejected() {
        let args = PriceArgs {
            term: Some(0.0),
            ..Default::default()
        };
        let err = render_price(&CliConfig::default(), &args).unwrap_err();
        match err {
            CliError::Validation(e) => assert_eq!(e.field(), "term"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }
}

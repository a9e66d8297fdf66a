//! Result rendering for table, JSON and CSV output

use pricer_analytic::{Evaluation, Greek, GreekSet, OptionContract, OptionType};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// One evaluated contract, optionally restricted to a single option type.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Report {
    pub contract: OptionContract,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<GreekSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<GreekSet>,
}

impl Report {
    /// Builds a report, keeping only `option_type` when given.
    pub fn new(
        contract: OptionContract,
        evaluation: Evaluation,
        option_type: Option<OptionType>,
    ) -> Self {
        let side = |ty: OptionType| {
            let keep = option_type.map_or(true, |only| only == ty);
            keep.then(|| *evaluation.get(ty))
        };
        Self {
            contract,
            call: side(OptionType::Call),
            put: side(OptionType::Put),
        }
    }

    fn sides(&self) -> impl Iterator<Item = (OptionType, &GreekSet)> {
        [
            (OptionType::Call, self.call.as_ref()),
            (OptionType::Put, self.put.as_ref()),
        ]
        .into_iter()
        .filter_map(|(ty, set)| set.map(|s| (ty, s)))
    }
}

/// Flat CSV record: one row per contract and option type.
#[derive(Debug, Serialize)]
struct CsvRecord {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    term: f64,
    option_type: OptionType,
    price: f64,
    delta: f64,
    gamma: f64,
    vega: f64,
    theta: f64,
    rho: f64,
}

/// Renders reports in the requested format.
pub fn render(reports: &[Report], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(reports)),
        OutputFormat::Json => render_json(reports),
        OutputFormat::Csv => render_csv(reports),
    }
}

fn render_table(reports: &[Report]) -> String {
    let mut out = String::new();
    for report in reports {
        let c = &report.contract;
        out.push_str(&format!(
            "S = {}  K = {}  r = {}  σ = {}  T = {}\n",
            c.spot(),
            c.strike(),
            c.rate(),
            c.volatility(),
            c.term()
        ));

        let sides: Vec<(OptionType, &GreekSet)> = report.sides().collect();
        let header: String = sides
            .iter()
            .map(|(ty, _)| format!(" {:>14} │", ty.to_string()))
            .collect();
        let rule = |left: &str, mid: &str, right: &str| {
            let mut line = format!("{}{}", left, "─".repeat(8));
            for _ in &sides {
                line.push_str(mid);
                line.push_str(&"─".repeat(16));
            }
            line.push_str(right);
            line.push('\n');
            line
        };

        out.push_str(&rule("┌", "┬", "┐"));
        out.push_str(&format!("│ {:<6} │{}\n", "", header));
        out.push_str(&rule("├", "┼", "┤"));
        out.push_str(&table_row("price", &sides, |s| format!("{:.2}", s.price)));
        for greek in Greek::ALL {
            out.push_str(&table_row(&greek.to_string(), &sides, |s| {
                format!("{:.6}", s.get(greek))
            }));
        }
        out.push_str(&rule("└", "┴", "┘"));
    }
    out
}

fn table_row<F>(label: &str, sides: &[(OptionType, &GreekSet)], cell: F) -> String
where
    F: Fn(&GreekSet) -> String,
{
    let cells: String = sides
        .iter()
        .map(|(_, set)| format!(" {:>14} │", cell(set)))
        .collect();
    format!("│ {:<6} │{}\n", label, cells)
}

fn render_json(reports: &[Report]) -> Result<String> {
    let json = match reports {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    Ok(json)
}

fn render_csv(reports: &[Report]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for report in reports {
        let c = report.contract;
        for (option_type, set) in report.sides() {
            writer.serialize(CsvRecord {
                spot: c.spot(),
                strike: c.strike(),
                rate: c.rate(),
                volatility: c.volatility(),
                term: c.term(),
                option_type,
                price: set.price,
                delta: set.delta,
                gamma: set.gamma,
                vega: set.vega,
                theta: set.theta,
                rho: set.rho,
            })?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_analytic::BlackScholes;

    fn example_report(option_type: Option<OptionType>) -> Report {
        let contract = OptionContract::new(22400.0, 23000.0, 0.1, 0.16, 0.01).unwrap();
        Report::new(contract, BlackScholes::new(contract).evaluate(), option_type)
    }

    #[test]
    fn test_report_filter() {
        let both = example_report(None);
        assert!(both.call.is_some() && both.put.is_some());

        let put_only = example_report(Some(OptionType::Put));
        assert!(put_only.call.is_none());
        assert_eq!(put_only.put.unwrap().price, 585.66);
    }

    #[test]
    fn test_table_contains_prices() {
        let table = render(&[example_report(None)], OutputFormat::Table).unwrap();
        assert!(table.contains("8.65"));
        assert!(table.contains("585.66"));
        for label in ["price", "delta", "gamma", "vega", "theta", "rho"] {
            assert!(table.contains(label), "missing row {}", label);
        }
    }

    #[test]
    fn test_table_single_side() {
        let table = render(&[example_report(Some(OptionType::Call))], OutputFormat::Table).unwrap();
        assert!(table.contains("call"));
        assert!(!table.contains("585.66"));
    }

    #[test]
    fn test_json_single_report() {
        let json = render(&[example_report(None)], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["contract"]["spot"], 22400.0);
        assert_eq!(value["call"]["price"], 8.65);
        assert_eq!(value["put"]["price"], 585.66);
    }

    #[test]
    fn test_json_filtered_omits_side() {
        let json = render(&[example_report(Some(OptionType::Call))], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("put").is_none());
    }

    #[test]
    fn test_json_many_reports_is_array() {
        let reports = [example_report(None), example_report(None)];
        let json = render(&reports, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_csv_rows() {
        let csv_out = render(&[example_report(None)], OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv_out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "spot,strike,rate,volatility,term,option_type,price,delta,gamma,vega,theta,rho"
        );
        assert!(lines[1].contains(",call,8.65,"));
        assert!(lines[2].contains(",put,585.66,"));
    }
}

// In app/src/report.rs

use analytics::{ReturnStatistics, SummaryStatistics};
use anyhow::Result;
use core_types::{CrossoverParams, MovingAverageSeries, PriceSeries, Symbol};
use serde::Serialize;
use strategies::{CrossoverOutput, Recommendation};

use crate::sweep::SweepRow;

#[derive(Debug, Serialize)]
pub struct SignalReport<'a> {
    pub params: &'a CrossoverParams,
    pub bars: usize,
    /// Set when the short window is not shorter than the long one.
    pub inverted: bool,
    pub recommendation: Option<Recommendation>,
    #[serde(flatten)]
    pub output: &'a CrossoverOutput,
}

#[derive(Debug, Serialize)]
pub struct SmaReport<'a> {
    pub symbol: &'a Symbol,
    pub closes: &'a PriceSeries,
    pub sma: &'a MovingAverageSeries,
}

#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    pub symbol: &'a Symbol,
    pub summary: SummaryStatistics,
    pub returns: Option<ReturnStatistics>,
}

#[derive(Debug, Serialize)]
pub struct SweepReport<'a> {
    pub symbol: &'a Symbol,
    pub bars: usize,
    pub rows: &'a [SweepRow],
}

pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

pub fn print_signal(series: &PriceSeries, report: &SignalReport) {
    let params = report.params;
    println!(
        "\n--- SMA Trading Strategy ({}/{}) for {} [{:?}] ---",
        params.short_window, params.long_window, params.symbol, params.asset_kind
    );
    if report.inverted {
        println!("Warning: the short window is not shorter than the long window.");
    }
    println!(
        "{:<12} {:>12} {:>12} {:>12} {:>8}",
        "Date", "Close", "Short SMA", "Long SMA", "Regime"
    );
    let output = report.output;
    for (i, point) in series.points().iter().enumerate() {
        println!(
            "{:<12} {:>12} {:>12} {:>12} {:>8}",
            point.timestamp.to_string(),
            cell((!point.is_missing()).then_some(point.close)),
            cell(output.short_ma.value_at(i)),
            cell(output.long_ma.value_at(i)),
            output.signal.points[i].regime,
        );
    }

    println!("\nTransitions ({}):", output.transitions.len());
    for event in &output.transitions {
        println!("  {} (bar {}): {}", event.timestamp, event.index, event.direction);
    }

    match report.recommendation {
        Some(Recommendation::Buy) => println!(
            "\nBased on the SMA strategy, it's recommended to buy {} at the last available data point.",
            params.symbol
        ),
        Some(Recommendation::Sell) => println!(
            "\nBased on the SMA strategy, it's recommended to sell {} at the last available data point.",
            params.symbol
        ),
        None => println!("\nNo data points in the selected period; no recommendation."),
    }
}

pub fn print_sma(report: &SmaReport) {
    println!("\n--- SMA {} for {} ---", report.sma.window, report.symbol);
    println!("{:<12} {:>12} {:>12}", "Date", "Close", "SMA");
    for (point, ma) in report.closes.points().iter().zip(&report.sma.points) {
        println!(
            "{:<12} {:>12} {:>12}",
            point.timestamp.to_string(),
            cell((!point.is_missing()).then_some(point.close)),
            cell(ma.value)
        );
    }
}

pub fn print_summary(report: &SummaryReport) {
    let s = &report.summary;
    println!("\n--- Basic Analysis for {} ({} closes) ---", report.symbol, s.observations);
    println!("Average {} Closing Price: ${:.2}", report.symbol, s.mean);
    println!("Minimum {} Closing Price: ${:.2}", report.symbol, s.min);
    println!("Maximum {} Closing Price: ${:.2}", report.symbol, s.max);
    match &report.returns {
        Some(r) => {
            println!("Annual Return is {:.2}%", r.annual_return_pct);
            println!("Standard Deviation is {:.2}%", r.annual_volatility_pct);
        }
        None => println!("Not enough consecutive closes for return statistics."),
    }
}

/// Helper function to print the sweep table.
pub fn print_sweep(report: &SweepReport) {
    println!("\n--- Window Sweep for {} ({} bars) ---", report.symbol, report.bars);
    println!(
        "{:>6} {:>6} {:>12} {:>10} {:>8} {:>6}",
        "Short", "Long", "Transitions", "Long bars", "Final", "Call"
    );
    for row in report.rows {
        let final_regime = row.final_regime.map_or_else(|| "-".to_string(), |r| r.to_string());
        let call = match row.recommendation {
            Some(Recommendation::Buy) => "BUY",
            Some(Recommendation::Sell) => "SELL",
            None => "-",
        };
        println!(
            "{:>6} {:>6} {:>12} {:>10} {:>8} {:>6}{}",
            row.short_window,
            row.long_window,
            row.transitions,
            row.long_bars,
            final_regime,
            call,
            if row.inverted { "  (inverted)" } else { "" }
        );
    }
}

//! Headless mode execution
//!
//! One-shot rendering of the dashboard blocks as plain text (or JSON) for
//! terminals without a TUI, cron jobs, and tests.

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::consts::dashboard_consts::{TOP_RISKY_COUNT, risk_filter};
use crate::stats::{self, KpiSummary};
use crate::{print_cmd_info, print_cmd_warn};
use serde::Serialize;
use std::error::Error;

/// JSON shape of the one-shot report.
#[derive(Debug, Serialize)]
struct Report {
    data_path: String,
    kpis: Option<KpiSummary>,
    categories: Option<Vec<CategoryCount>>,
    top_risky: Vec<TopEntry>,
    filter_threshold: f64,
    filter_count: usize,
}

#[derive(Debug, Serialize)]
struct CategoryCount {
    level: String,
    count: usize,
}

#[derive(Debug, Serialize)]
struct TopEntry {
    product_id: String,
    failure_risk: f64,
}

/// Runs the application in headless mode
///
/// Computes the same blocks the TUI renders (KPIs, categories, top-risk table,
/// default-threshold filter) and prints them once. Per-block failures degrade
/// that block only; the rest of the report still prints.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `json` - Emit the report as JSON instead of text
pub fn run_headless_mode(session: SessionData, json: bool) -> Result<(), Box<dyn Error>> {
    // Primed during setup; this serves the cached table.
    let dataset = session.cache.get()?;
    let dataset = &*dataset;
    let threshold = risk_filter::DEFAULT;

    let kpis = stats::summarize(dataset);
    let breakdown = stats::categorize(dataset);
    let top = stats::top_n(dataset, TOP_RISKY_COUNT);
    let filtered = stats::filter_by_threshold(dataset, threshold);

    if json {
        let report = Report {
            data_path: session.data_path.display().to_string(),
            kpis: kpis.ok(),
            categories: breakdown.as_ref().ok().map(|b| {
                b.iter()
                    .map(|(level, count)| CategoryCount {
                        level: level.label().to_string(),
                        count,
                    })
                    .collect()
            }),
            top_risky: top
                .iter()
                .map(|r| TopEntry {
                    product_id: r.product_id.clone(),
                    failure_risk: r.failure_risk,
                })
                .collect(),
            filter_threshold: threshold,
            filter_count: filtered.count(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_session_starting("headless", &session.data_path);

    match &kpis {
        Ok(kpis) => {
            print_cmd_info!(
                "KPIs",
                "Total scheduled maintenances: {} | Avg failure risk: {} | Max failure risk: {} | High-risk machines (>0.8): {}",
                kpis.total_count,
                kpis.avg_risk_percent(),
                kpis.max_risk_percent(),
                kpis.high_risk_count
            );
        }
        Err(e) => print_cmd_warn!("KPIs", "N/A ({})", e),
    }

    match &breakdown {
        Ok(breakdown) => {
            let counts = breakdown
                .iter()
                .map(|(level, count)| format!("{}: {}", level.label(), count))
                .collect::<Vec<_>>()
                .join(" | ");
            print_cmd_info!("Risk categories", "{}", counts);
        }
        Err(e) => print_cmd_warn!("Risk categories", "N/A ({})", e),
    }

    if top.is_empty() {
        print_cmd_warn!("Top risky machines", "No records");
    } else {
        for record in &top {
            print_cmd_info!(
                "Top risky",
                "{}\t{:.2}",
                record.product_id,
                record.failure_risk
            );
        }
    }

    print_cmd_info!("Risk filter", "{}", filtered.summary_line());

    print_session_exit_success();
    Ok(())
}

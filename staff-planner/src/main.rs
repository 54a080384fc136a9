/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use staff_planner::adapter;
use staff_planner::config::PlannerConfigManager;
use staff_planner::planner::StaffPlanner;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Staff planner: assigns person-days from a team roster to prioritised
/// project demand and writes assignment and utilization reports.
///
/// Example:
///   staff-planner --people team.xlsx --output final_assignments.xlsx
///   staff-planner --people people.csv --projects projects.csv --output reports/
#[derive(Debug, Parser)]
#[command(
    name = "staff-planner",
    about = "Staff planner – greedy person-day allocation",
    long_about = None,
)]
struct Cli {
    /// People table (.csv, or a workbook containing the People sheet).
    #[arg(long = "people")]
    people: PathBuf,

    /// Projects table. Defaults to the people file (one workbook, two sheets).
    #[arg(long = "projects")]
    projects: Option<PathBuf>,

    /// Output path: an .xlsx workbook, or a directory for CSV reports.
    #[arg(short = 'o', long = "output", default_value = "final_assignments.xlsx")]
    output: PathBuf,

    /// Path to the YAML planner configuration file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        people   = %cli.people.display(),
        projects = ?cli.projects,
        output   = %cli.output.display(),
        config   = ?cli.config,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // ── Load planner configuration ────────────────────────────────────────────
    let mut config_manager = PlannerConfigManager::new();
    match &cli.config {
        Some(path) => {
            info!("Loading planner configuration from: {}", path.display());
            config_manager
                .load_from_file(path)
                .context("Failed to load planner configuration")?;
        }
        None => {
            warn!("No planner configuration file provided, using default settings");
        }
    }
    let config = Arc::new(config_manager.into_config());

    // ── Read input tables ─────────────────────────────────────────────────────
    let projects_path = cli.projects.as_ref().unwrap_or(&cli.people);
    let people = adapter::read_table(&cli.people, &config.people_sheet)
        .context("Failed to read people table")?;
    let projects = adapter::read_table(projects_path, &config.projects_sheet)
        .context("Failed to read projects table")?;

    // ── Plan ──────────────────────────────────────────────────────────────────
    let planner = StaffPlanner::new(Arc::clone(&config));
    let plan = planner
        .plan(&people, &projects)
        .context("Input tables are not valid")?;

    // ── Write reports ─────────────────────────────────────────────────────────
    let location = adapter::write_reports(&cli.output, &plan.reports.to_tables())
        .context("Failed to write reports")?;

    let summary = plan.summary();
    info!("Done:");
    info!("  Assignment lines:   {}", summary.assignment_lines);
    info!("  Days assigned:      {}", summary.days_assigned);
    info!("  Days still missing: {}", summary.days_missing);
    info!("  Output:             {}", location);
    if !plan.notices.is_empty() {
        let shortfalls = plan.notices.iter().filter(|n| n.is_shortfall()).count();
        warn!(
            "{} planning notice(s) raised, {} of them coverage shortfalls; see warnings above",
            plan.notices.len(),
            shortfalls
        );
    }
    Ok(())
}

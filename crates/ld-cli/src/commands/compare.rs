//! Compare command implementation
//!
//! Runs the content validator against production and against the development
//! branch, and reports the broken content only the branch introduces.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use ld_core::{
    dashboard_ids, diff_snapshots, enrich, normalize_all, Config, FolderIndex, NormalizedRecord,
};
use ld_looker::{fetch_usage, LookerApi, Session};
use ld_report::{write_report, ReportOptions};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

use crate::cli::{CompareArgs, GlobalArgs, OutputFormat};
use crate::commands::common::ExitCode;
use crate::context::RuntimeContext;

/// Comparison summary for JSON output
#[derive(Debug, Serialize)]
struct CompareSummary {
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
    production_count: usize,
    development_count: usize,
    new_count: usize,
    dashboards_enriched: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_path: Option<String>,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// What became of the report file
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReportOutcome {
    /// Nothing new was broken, so no file was written
    Skipped,
    /// The report was written with this many data rows
    Written { path: String, rows: usize },
    /// The destination could not be written
    Unwritable { path: String, message: String },
}

/// Result of one production/development comparison
#[derive(Debug)]
pub(crate) struct Comparison {
    pub(crate) branch: String,
    pub(crate) production_count: usize,
    pub(crate) development_count: usize,
    pub(crate) new_count: usize,
    pub(crate) dashboards_enriched: usize,
    pub(crate) report: ReportOutcome,
}

/// Operator-facing output. Silent in JSON mode.
pub(crate) struct Console {
    quiet: bool,
}

impl Console {
    pub(crate) fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn say(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }

    fn spinner(&self, msg: String) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg);
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }
}

/// Execute the compare command
pub async fn execute(args: &CompareArgs, global: &GlobalArgs) -> Result<()> {
    let mut ctx = RuntimeContext::new(global)?;
    let json_mode = args.format == OutputFormat::Json;

    if let Some(output) = &args.output {
        ctx.config.output_path = output.clone();
    }
    if let Some(look_id) = &args.usage_look {
        ctx.config.usage.look_id = look_id.clone();
    }

    ctx.verbose(&format!("Looker API: {}", ctx.config.api_url()));
    ctx.verbose(&format!("Content links: {}", ctx.config.web_base_url()));
    ctx.verbose(&format!("Report destination: {}", ctx.config.output_path));

    let console = Console::new(json_mode);
    let result = run_comparison(ctx.api.as_ref(), &ctx.config, &console).await;

    match result {
        Ok(comparison) => {
            if json_mode {
                let summary = success_summary(&comparison);
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            if args.fail_on_new && comparison.new_count > 0 {
                return Err(ExitCode(1).into());
            }
            Ok(())
        }
        Err(e) if json_mode => {
            let summary = CompareSummary {
                timestamp: Utc::now(),
                branch: None,
                production_count: 0,
                development_count: 0,
                new_count: 0,
                dashboards_enriched: 0,
                output_path: None,
                success: false,
                error: Some(format!("{:#}", e)),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Err(ExitCode(1).into())
        }
        Err(e) => Err(e),
    }
}

/// Run the full pipeline against `api`.
///
/// Folders are listed once, in production, and reused for both passes. An
/// unwritable report destination is reported in the outcome rather than
/// failing the run.
pub(crate) async fn run_comparison(
    api: &dyn LookerApi,
    config: &Config,
    console: &Console,
) -> Result<Comparison> {
    log::debug!("Comparing content through the {} Looker API", api.api_type());
    let mut session = api
        .login()
        .await
        .context("Failed to authenticate with Looker")?;

    let folders = api
        .list_folders(&session)
        .await
        .context("Failed to list folders")?;
    let folders = FolderIndex::build(folders);
    log::debug!("Indexed {} folders", folders.len());

    let base_url = config.web_base_url();
    let timeout = Duration::from_secs(config.validation_timeout);

    console.say("Checking for broken content in production 🔎");
    let production = validate(api, &session, &folders, &base_url, timeout, console)
        .await
        .context("Content validation failed in production")?;

    api.enter_development_mode(&mut session, &config.dev_workspace)
        .await
        .context("Failed to switch to the development workspace")?;
    let branch = api
        .current_branch_name(&session, &config.lookml_project)
        .await
        .with_context(|| {
            format!(
                "Failed to read the branch of project '{}'",
                config.lookml_project
            )
        })?;

    console.say(&format!(
        "Checking for broken content in dev branch {} 🔎",
        branch
    ));
    let development = validate(api, &session, &folders, &base_url, timeout, console)
        .await
        .with_context(|| format!("Content validation failed in dev branch {}", branch))?;

    let new_content = diff_snapshots(&production, &development);
    let mut comparison = Comparison {
        branch,
        production_count: production.len(),
        development_count: development.len(),
        new_count: new_content.len(),
        dashboards_enriched: 0,
        report: ReportOutcome::Skipped,
    };

    if new_content.is_empty() {
        console.say(&format!(
            "No new broken content in development branch {} ✅",
            comparison.branch
        ));
        return Ok(comparison);
    }

    console.say(&format!(
        "There is new broken content in development branch {} ❌",
        comparison.branch
    ));

    let ids = dashboard_ids(&new_content);
    let usage = fetch_usage(api, &session, &config.usage, &ids)
        .await
        .with_context(|| {
            format!(
                "Dashboard usage query through look {} failed",
                config.usage.look_id
            )
        })?;
    comparison.dashboards_enriched = ids.len();

    let enriched = enrich(new_content, &usage);
    let options = ReportOptions {
        include_last_run: config.usage.include_last_run,
    };
    let path = config.output_path.clone();

    comparison.report = match write_report(&enriched, options, Path::new(&path)) {
        Ok(rows) => {
            console.say(&format!("Broken content information output to {}", path));
            ReportOutcome::Written { path, rows }
        }
        Err(e) if e.is_recoverable() => {
            let message = e.to_string();
            // Reported even in JSON mode; the summary still says success.
            eprintln!("Could not write the report: {}", message);
            ReportOutcome::Unwritable { path, message }
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to write report to {}", path));
        }
    };

    Ok(comparison)
}

/// One validator pass in the session's current workspace, normalized
async fn validate(
    api: &dyn LookerApi,
    session: &Session,
    folders: &FolderIndex,
    base_url: &str,
    timeout: Duration,
    console: &Console,
) -> Result<Vec<NormalizedRecord>> {
    let spinner = console.spinner(format!("Validating content in {}", session.environment()));
    let items = api.validate_content(session, timeout).await;
    spinner.finish_and_clear();
    let items = items?;

    log::debug!(
        "Validator reported {} broken items in {}",
        items.len(),
        session.environment()
    );
    let records = normalize_all(&items, folders, base_url)?;
    Ok(records)
}

fn success_summary(comparison: &Comparison) -> CompareSummary {
    let output_path = match &comparison.report {
        ReportOutcome::Written { path, .. } => Some(path.clone()),
        ReportOutcome::Skipped | ReportOutcome::Unwritable { .. } => None,
    };
    let error = match &comparison.report {
        ReportOutcome::Unwritable { message, .. } => Some(message.clone()),
        ReportOutcome::Skipped | ReportOutcome::Written { .. } => None,
    };
    CompareSummary {
        timestamp: Utc::now(),
        branch: Some(comparison.branch.clone()),
        production_count: comparison.production_count,
        development_count: comparison.development_count,
        new_count: comparison.new_count,
        dashboards_enriched: comparison.dashboards_enriched,
        output_path,
        success: true,
        error,
    }
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod tests;

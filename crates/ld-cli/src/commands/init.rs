//! Init command implementation - writes a starter lookdiff.yml

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::InitArgs;

/// Starter configuration. Credentials are placeholders; the
/// `LOOKERSDK_*` environment variables override them.
pub(crate) const CONFIG_TEMPLATE: &str = r#"# Lookdiff configuration

looker:
  # API host, including the admin port when the instance uses one
  base_url: https://example.looker.com:19999
  client_id: your_client_id
  # Prefer LOOKERSDK_CLIENT_SECRET over committing the secret
  client_secret: your_client_secret
  verify_ssl: true
  # Seconds, for every call except content validation
  timeout: 120
  api_version: "4.0"

# Stripped from base_url to build content links
admin_port: 19999

# Seconds allowed for one content validator run
validation_timeout: 600

# LookML project whose checked-out branch is reported
lookml_project: my_project
dev_workspace: dev

output_path: new_broken_content.csv

# Saved look whose query reports dashboard usage
usage:
  look_id: "4224"
  dashboard_id_field: dashboard.id
  run_count_field: history.dashboard_run_count
  last_run_field: history.most_recent_run_at
  include_last_run: false
"#;

/// Execute the init command
pub(crate) async fn execute(args: &InitArgs) -> Result<()> {
    let path = Path::new(&args.path);

    if path.exists() && !args.force {
        anyhow::bail!(
            "'{}' already exists. Pass --force to overwrite it.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {}", path.display());
    println!("\nNext steps:");
    println!("  1. Set looker.base_url and lookml_project");
    println!("  2. Export LOOKERSDK_CLIENT_ID and LOOKERSDK_CLIENT_SECRET");
    println!("  3. Check out your branch in Looker, then run: lookdiff compare");

    Ok(())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;

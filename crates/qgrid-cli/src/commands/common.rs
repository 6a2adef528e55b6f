//! Shared helpers for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use qgrid_config::{CircuitConfig, CircuitSetup};
use qgrid_ir::Grid;

/// Load and validate a configuration file.
pub fn load_setup(path: &str) -> Result<CircuitSetup> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }

    let config =
        CircuitConfig::from_path(path).with_context(|| format!("Failed to load {path}"))?;
    let setup = CircuitSetup::from_config(&config)?;
    info!(
        "Loaded {}x{} circuit from {path}",
        setup.num_rows(),
        setup.num_columns()
    );
    Ok(setup)
}

/// Pick the starting grid or a 1-based success grid.
pub fn select_grid(setup: &CircuitSetup, success: Option<usize>) -> Result<&Grid> {
    match success {
        None => Ok(&setup.starting_grid),
        Some(0) => anyhow::bail!("Success grids are numbered from 1"),
        Some(n) => setup.success_grids.get(n - 1).with_context(|| {
            format!(
                "Success grid {n} does not exist; the configuration has {}",
                setup.success_grids.len()
            )
        }),
    }
}

/// Describe which grid was selected.
pub fn grid_label(success: Option<usize>) -> String {
    match success {
        None => "starting grid".to_string(),
        Some(n) => format!("success grid {n}"),
    }
}

//! Program command implementation.

use anyhow::Result;
use console::style;

use qgrid_ir::Program;

use super::common::{grid_label, load_setup, select_grid};

/// Execute the program command.
pub fn execute(input: &str, success: Option<usize>, format: &str) -> Result<()> {
    let setup = load_setup(input)?;
    let grid = select_grid(&setup, success)?;
    let program = Program::from_grid(grid);

    match format.to_lowercase().as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&program)?),
        "table" => {
            println!(
                "{} Simulator program for the {} ({} qubits, {} ops)",
                style("→").cyan().bold(),
                style(grid_label(success)).green(),
                program.num_qubits,
                program.len()
            );
            for op in &program.ops {
                match op.control {
                    Some(control) => println!(
                        "  [{}] {:<3} q{} -> q{}",
                        op.column,
                        op.gate.simulator_name(),
                        control,
                        op.target
                    ),
                    None => println!(
                        "  [{}] {:<3} q{}",
                        op.column,
                        op.gate.simulator_name(),
                        op.target
                    ),
                }
            }
        }
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    }

    Ok(())
}

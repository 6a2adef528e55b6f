//! Validate command implementation.

use anyhow::Result;
use console::style;

use qgrid_config::{CircuitSetup, Session};
use qgrid_ir::{BinaryGate, RenderCell};

use super::common::load_setup;

/// Execute the validate command.
pub fn execute(input: &str) -> Result<()> {
    println!(
        "{} Validating {}",
        style("→").cyan().bold(),
        style(input).green()
    );

    let setup = load_setup(input)?;

    println!(
        "  Grid: {} rows x {} columns, {} gates",
        setup.num_rows(),
        setup.num_columns(),
        setup.starting_grid.num_gates()
    );
    let gates: Vec<&str> = setup.allowed_gates.iter().map(|g| g.name()).collect();
    println!("  Allowed gates: {}", gates.join(", "));
    println!("  Success grids: {}", setup.success_grids.len());
    if let Some(black_box) = &setup.black_box {
        println!(
            "  Black box: columns {}..={} ({})",
            black_box.columns.start(),
            black_box.columns.end(),
            if black_box.label.is_empty() {
                "unlabelled"
            } else {
                black_box.label.as_str()
            }
        );
    }
    if let Some(solvable) = setup.solvable {
        println!("  Interactive: {solvable:?}");
    }
    print_starting_grid(&setup);

    // Interactive puzzles have their own requirements.
    let session = Session::new(setup)?;
    if session.is_solved() {
        println!(
            "  {} the starting grid already matches a success grid",
            style("note:").yellow()
        );
    }

    println!("{} Configuration is valid", style("✓").green().bold());
    Ok(())
}

fn print_starting_grid(setup: &CircuitSetup) {
    let mut view = setup.starting_grid.renderable();
    if let Some(black_box) = &setup.black_box {
        view = view.masked(&black_box.columns);
    }

    println!("  Starting grid:");
    for (row, cells) in view.rows().iter().enumerate() {
        let symbols: Vec<String> = cells
            .iter()
            .map(|cell| format!("{:^3}", symbol(*cell)))
            .collect();
        println!("    q{row} {}", symbols.join(""));
    }
}

fn symbol(cell: RenderCell) -> &'static str {
    match cell {
        RenderCell::Empty => "─",
        RenderCell::Unary(gate) => gate.name(),
        RenderCell::Control(_) | RenderCell::Action(BinaryGate::CZ) => "●",
        RenderCell::Action(BinaryGate::CX) => "⊕",
    }
}

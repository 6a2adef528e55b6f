//! Route command implementation.

use anyhow::Result;
use console::style;

use qgrid_layout::{ColumnWires, Geometry, Router, WirePath};

use super::common::{grid_label, load_setup, select_grid};

/// Execute the route command.
pub fn execute(input: &str, success: Option<usize>, format: &str) -> Result<()> {
    let setup = load_setup(input)?;
    let grid = select_grid(&setup, success)?;

    let mut router = Router::new(Geometry::for_grid(grid.num_rows(), grid.num_columns()));
    if let Some(black_box) = &setup.black_box {
        router = router.with_black_box(black_box.columns.clone());
    }
    let routed = router.route(grid);

    match format.to_lowercase().as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&routed)?),
        "svg" => {
            for wire in routed.iter().flat_map(|column| &column.wires) {
                println!("{}", wire.path.to_svg_path());
            }
        }
        "table" => print_table(&routed, &grid_label(success), setup.black_box.is_some()),
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json, svg"),
    }

    Ok(())
}

fn print_table(routed: &[ColumnWires], label: &str, has_black_box: bool) {
    println!(
        "{} Control wires of the {}",
        style("→").cyan().bold(),
        style(label).green()
    );

    let mut total = 0;
    for column in routed {
        if column.wires.is_empty() {
            continue;
        }
        println!("  Column {}", style(column.column).yellow());
        for wire in &column.wires {
            total += 1;
            match &wire.path {
                WirePath::Straight(_) => {
                    println!("    rows {}-{}  straight", wire.from_row, wire.to_row);
                }
                WirePath::Jogged(path) => println!(
                    "    rows {}-{}  {}  gutter={:?} jog={:?}/{:?}",
                    wire.from_row,
                    wire.to_row,
                    style("jogged").magenta(),
                    path.tracks.gutter,
                    path.tracks.jog_start,
                    path.tracks.jog_end
                ),
            }
        }
    }

    if total == 0 {
        println!("  No control wires");
    }
    if has_black_box {
        println!("  {}", style("Black-boxed columns are not drawn").dim());
    }
}

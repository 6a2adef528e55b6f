//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - editable quantum circuit grids",
        style("qgrid").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qgrid-ir      Circuit grid model and simulator program");
    println!("  qgrid-config  Configuration validation and editing sessions");
    println!("  qgrid-layout  Layout geometry and control-wire routing");
    println!("  qgrid-cli     Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}

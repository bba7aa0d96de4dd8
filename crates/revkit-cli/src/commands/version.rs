//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - logic-to-quantum-circuit synthesis",
        style("revkit").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  revkit-ir       Reversible and phase gate netlists");
    println!("  revkit-logic    Truth tables, permutations and logic networks");
    println!("  revkit-verilog  Structural Verilog reader");
    println!("  revkit-synth    Synthesis algorithms");
    println!("  revkit-cli      Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/msoeken/revkit").underlined()
    );
    println!("License:    {}", style("MIT").dim());
}

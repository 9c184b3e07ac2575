use std::io;

use anyhow::Context;
use colored::Colorize;

use error_scenarios::{interrupt_pair, runner, Console};

fn main() -> anyhow::Result<()> {
    println!("{}", "=== Error Handling Scenarios ===".cyan().bold());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    // Held but never fired; tests exercise the interrupted pause.
    let (_interrupter, gate) = interrupt_pair();

    runner::run_all(&mut console, &gate).context("demonstration sequence aborted")?;
    drop(console);

    println!("{}", "All scenarios completed.".green());
    Ok(())
}

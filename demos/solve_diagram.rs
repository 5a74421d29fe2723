//! Solving Track Diagrams
//!
//! This example walks a few hand-drawn diagrams from `@` to `x`.
//!
//! Key concepts:
//! - One-call solving with `trackwalk::solve`
//! - Failure reasons via `Solver::try_solve`
//! - Custom symbol sets validated by `SymbolsBuilder`
//!
//! Run with: cargo run --example solve_diagram

use trackwalk::{solve, Solver, Symbols};

const BASIC: &str = concat!(
    "@---A---+\n",
    "        |\n",
    "x-B-+   C\n",
    "    |   |\n",
    "    +---+",
);

const CROSSING: &str = concat!(
    "@\n",
    "| +-C--+\n",
    "A |    |\n",
    "+---B--+\n",
    "  |      x\n",
    "  |      |\n",
    "  +---D--+",
);

fn main() {
    println!("=== Track Diagram Solver ===\n");

    println!("Basic diagram:\n{BASIC}\n");
    match solve(BASIC) {
        Some(solution) => println!("{solution}\n"),
        None => println!("No unique path\n"),
    }

    println!("Diagram crossing itself:\n{CROSSING}\n");
    match solve(CROSSING) {
        Some(solution) => println!("{solution}\n"),
        None => println!("No unique path\n"),
    }

    println!("Failures:");
    let solver = Solver::new();
    for input in ["@--A--", "x-@-x", "-A-x"] {
        match solver.try_solve(input) {
            Ok(solution) => println!("  {input:<8} solved: {}", solution.tiles),
            Err(err) => println!("  {input:<8} {err}"),
        }
    }

    println!("\nCustom symbols:");
    let symbols = Symbols::builder()
        .start('>')
        .end('<')
        .horizontal('=')
        .vertical('!')
        .corner('*')
        .build()
        .unwrap();
    let input = ">==*\n   !\n   <";
    match Solver::with_symbols(symbols).solve(input) {
        Some(solution) => println!("  {}", solution.tiles),
        None => println!("  No unique path"),
    }

    println!("\nRejected symbol set:");
    if let Err(err) = Symbols::builder().end('+').build() {
        println!("  {err}");
    }

    println!("\n=== Example Complete ===");
}

//! Demo REPL: type refinement messages, watch the filter state and the
//! demo catalog rows respond.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use bodega::catalog::{exclude_by_tags, Catalog, DemoCatalog};
use bodega::session::{self, SessionState};

fn main() -> rustyline::Result<()> {
    env_logger::init();

    println!("╔════════════════════════════════════════════════════╗");
    println!("║  bodega — conversational catalog refinement demo   ║");
    println!("╚════════════════════════════════════════════════════╝");
    println!();
    println!("Try: 'show me more snacks', 'no plastic', 'only organic'.");
    println!("Ctrl-D or 'quit' to exit.");
    println!();

    let catalog = DemoCatalog::new();
    let mut state = SessionState::demo();
    let mut rl = DefaultEditor::new()?;

    loop {
        let line = match rl.readline("you> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }
        let _ = rl.add_history_entry(input);

        let outcome = session::process_input(input, &mut state);
        println!();
        println!("bodega> {}", outcome.message);

        // Re-query only the buckets this turn touched; fall back to every
        // seeded category when the message was attribute-only.
        let categories: Vec<String> = if outcome.affected_categories.is_empty() {
            outcome.filters.categories.keys().cloned().collect()
        } else {
            outcome.affected_categories.clone()
        };

        for category in &categories {
            let cap = outcome.filters.categories.get(category).copied().unwrap_or(3);
            let products = catalog.query(category, &outcome.filters.include_tags, cap as usize);
            let products = exclude_by_tags(products, &outcome.filters.exclude_tags);
            println!();
            println!("  {} (cap {}):", category, cap);
            if products.is_empty() {
                println!("    (nothing matches the current filters)");
            }
            for p in products {
                println!("    - {} — {} (${:.2}) [{}]", p.name, p.brand, p.price, p.tags.join(", "));
            }
        }
        println!();
    }

    println!("bye.");
    Ok(())
}

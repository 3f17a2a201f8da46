use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::sync::Arc;
use warung::application::processing::OrderProcessor;
use warung::application::session::OrderSession;
use warung::domain::menu::Menu;
use warung::domain::ports::SharedOrderStore;
use warung::infrastructure::in_memory::InMemoryOrderStore;
use warung::interfaces::console::prompt::Console;
use warung::interfaces::console::report::ReportWriter;

/// Interactive order-taking for a small restaurant: one prompt loop, no
/// subcommands or flags. Parsing still gives us --help and --version.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse();
    warung::logging::init();

    let menu = Menu::standard();
    let store: SharedOrderStore = Arc::new(InMemoryOrderStore::new());
    let session = OrderSession::new(menu.clone(), store);

    // Ordering phase: prompt, validate, accumulate until the sentinel.
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.banner(&menu).into_diagnostic()?;
    session.run(&mut console).await.into_diagnostic()?;

    // Report phase over the final snapshot.
    let order = session.snapshot().await.into_diagnostic()?;
    let mut report = ReportWriter::new(io::stdout());
    report.write_receipt(&order).into_diagnostic()?;
    report.write_encoded_summary(&order).into_diagnostic()?;

    // Processing simulation: drain status lines in arrival order until the
    // sink closes behind the last worker.
    let mut results = OrderProcessor::default().run(order);
    while let Some(result) = results.recv().await {
        report.write_status(&result).into_diagnostic()?;
    }
    report.write_farewell().into_diagnostic()?;

    Ok(())
}

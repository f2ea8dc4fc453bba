use clap::Parser;
use miette::{IntoDiagnostic, Result};
use teller::application::driver::SessionDriver;
use teller::domain::account::Account;
use teller::domain::ports::ConsoleBox;
use teller::domain::serial::SerialCounter;
use teller::interfaces::console::Terminal;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of account sessions to run, one after another
    #[arg(long, default_value_t = 1)]
    sessions: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let counter = SerialCounter::new();
    let console: ConsoleBox = Box::new(Terminal::new());
    let mut driver = SessionDriver::new(console);

    for _ in 0..cli.sessions {
        let mut account = Account::open(&counter);
        driver.run(&mut account).await.into_diagnostic()?;
    }

    Ok(())
}

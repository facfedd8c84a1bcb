use clap::Parser;
use gavel_console::{command, error::ConsoleError, session::{Reply, Session}, source};
use gavel_data::catalog::{client_catalog, management_catalog};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

///
/// Args
///

#[derive(Debug, Parser)]
#[command(name = "gavel", about = "Operator console for the auction platform's GraphQL APIs")]
struct Args {
    /// Rows per table page.
    #[arg(long, env = "GAVEL_PAGE_SIZE", default_value_t = 10)]
    page_size: u32,
}

fn main() -> Result<(), ConsoleError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let mut session = Session::new(
        source::default_sources(),
        vec![management_catalog(), client_catalog()],
        args.page_size,
    );

    info!(page_size = args.page_size, "console starting");
    println!("gavel - auction platform API console (type `help`)");

    let mut editor = DefaultEditor::new()?;
    loop {
        let line = match editor.readline("gavel> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        let _ = editor.add_history_entry(line.as_str());

        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!(%err, "rejected input");
                println!("{err}");
                continue;
            }
        };

        match session.apply(command) {
            Ok(Reply::Text(text)) => print!("{text}"),
            Ok(Reply::Quit) => break,
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

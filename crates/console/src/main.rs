use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;

use stockroom_console::{Config, Session, Step};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    stockroom_observability::init(config.log_format);

    tracing::info!(
        low_stock_threshold = config.low_stock_threshold,
        "session started"
    );

    let mut session = Session::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Stockroom inventory ledger. Type 'help' for commands.")?;
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            break;
        }

        match session.handle_line(&line) {
            Step::Continue(out) => stdout.write_all(out.as_bytes())?,
            Step::Quit => break,
        }
    }

    tracing::info!(
        products = session.ledger().products().len(),
        movements = session.ledger().movements().len(),
        "session ended"
    );
    Ok(())
}

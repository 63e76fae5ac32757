use clap::Args;
use letterdraw::config::Config;
use letterdraw::error::PkResult;
use letterdraw::selector::{self, Letter};
use letterdraw::session::Session;
use std::io;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Letter the item names start with
    pub letter: Letter,

    #[command(flatten)]
    pub config: Config,
}

/// Writes every eligible item as CSV on stdout, header first.
pub fn run(args: ListArgs, session: &Session) -> PkResult<()> {
    let request = args.config.filters.request(args.letter);
    let pool = selector::candidates(session.records(), &request);
    info!("{} eligible items for {}", pool.len(), args.letter);

    let Some(catalog) = session.catalog() else {
        return Ok(());
    };

    let mut wtr = csv::Writer::from_writer(io::stdout());
    wtr.write_record(catalog.headers())?;
    for record in pool {
        wtr.write_record(record.values())?;
    }
    wtr.flush()?;
    Ok(())
}

use crate::reports;
use clap::Args;
use letterdraw::config::Config;
use letterdraw::error::PkResult;
use letterdraw::selector::{self, ExclusionSet, Letter};
use letterdraw::session::Session;

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: StatsArgs, session: &Session) -> PkResult<()> {
    let records = session.records();
    let filters = &args.config.filters;

    let counts: Vec<(Letter, usize, usize)> = Letter::all()
        .map(|letter| {
            let request = filters.request(letter);
            let total = selector::candidates(records, &request.exclusions(ExclusionSet::new())).len();
            let eligible = selector::candidates(records, &request).len();
            (letter, total, eligible)
        })
        .collect();

    println!(
        "{}",
        reports::stats_table(records, filters.wildcard, filters.exclusions(), &counts)
    );
    if let Some(catalog) = session.catalog() {
        if catalog.dropped() > 0 {
            println!("Skipped {} malformed rows.", catalog.dropped());
        }
    }
    Ok(())
}

use crate::reports::{self, NoMatchReport};
use clap::Args;
use letterdraw::config::Config;
use letterdraw::error::PkResult;
use letterdraw::selector::{self, Letter, Selection};
use letterdraw::session::Session;

#[derive(Args, Debug, Clone)]
pub struct PickArgs {
    /// Letter the item name starts with
    pub letter: Letter,

    #[command(flatten)]
    pub config: Config,

    /// Number of draws (each one is an independent reroll)
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Print JSON lines instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: PickArgs, session: &Session) -> PkResult<()> {
    let mut rng = args.config.rng.build();
    let request = args.config.filters.request(args.letter);

    for _ in 0..args.count {
        match selector::select(session.records(), &request, &mut rng) {
            Selection::Picked(record) => {
                if args.json {
                    println!("{}", serde_json::to_string(record)?);
                } else {
                    println!("{}", reports::item_table(record));
                }
            }
            Selection::NoMatch(no_match) => {
                if args.json {
                    println!("{}", serde_json::to_string(&NoMatchReport::from(&no_match))?);
                } else {
                    println!("{}", no_match);
                }
                // Rerolling an empty pool cannot change the outcome.
                break;
            }
        }
    }
    Ok(())
}

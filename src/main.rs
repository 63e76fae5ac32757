// ===== letterdraw/src/main.rs =====
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use letterdraw::api;
use letterdraw::config::{Config, FilterParams};
use letterdraw::session::Session;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/items.csv")]
    data: String,

    /// JSON file with default filter switches
    #[arg(global = true, long)]
    profile: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Pick(cmd::pick::PickArgs),
    List(cmd::list::ListArgs),
    Stats(cmd::stats::StatsArgs),
    Shell(cmd::shell::ShellArgs),
}

impl Commands {
    fn config_mut(&mut self) -> &mut Config {
        match self {
            Commands::Pick(args) => &mut args.config,
            Commands::List(args) => &mut args.config,
            Commands::Stats(args) => &mut args.config,
            Commands::Shell(args) => &mut args.config,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Commands::Pick(_) => "pick",
            Commands::List(_) => "list",
            Commands::Stats(_) => "stats",
            Commands::Shell(_) => "shell",
        }
    }
}

fn apply_profile(path: &str, config: &mut Config, sub_matches: &ArgMatches) {
    info!("⚖️  Loading filter profile from: {}", path);
    let mut file_filters = FilterParams::load_from_file(path).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    file_filters.merge_from_cli(&config.filters, sub_matches);
    config.filters = file_filters;
}

fn main() {
    let matches = Cli::command().get_matches();
    let mut cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = cli.profile.clone() {
        let name = cli.command.name();
        if let Some(sub_matches) = matches.subcommand_matches(name) {
            apply_profile(&path, cli.command.config_mut(), sub_matches);
        }
    }

    let mut session = Session::new();
    session.finish_load(api::load_catalog(&cli.data));

    let result = match cli.command {
        Commands::Pick(args) => cmd::pick::run(args, &session),
        Commands::List(args) => cmd::list::run(args, &session),
        Commands::Stats(args) => cmd::stats::run(args, &session),
        Commands::Shell(args) => cmd::shell::run(args, &mut session),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

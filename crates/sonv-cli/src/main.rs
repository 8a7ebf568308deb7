use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use sonv_cli::commands;

#[derive(Parser, Debug)]
#[command(
    name = "sonv",
    about = "Score and interpret SONV-112 screening questionnaire answers",
    version
)]
struct Cli {
    /// Rule set file to use instead of the built-in defaults
    #[arg(long, global = true, env = "SONV_RULES")]
    rules: Option<PathBuf>,
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
    /// Write logs to stderr as JSON
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score an answers file (`-` for stdin) and print the full results
    Score { answers: PathBuf },
    /// Score the answers carried by a share code, fragment or link
    Decode { code: String },
    /// Print the share code for an answers file (`-` for stdin)
    Encode { answers: PathBuf },
    /// Print the active rule set as JSON
    Rules,
    /// Print the questionnaire definition as JSON
    Registry,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let output = match cli.command {
        Command::Score { answers } => {
            let rules = commands::load_rules(cli.rules.as_deref())?;
            let answers = commands::read_answers(&answers)?;
            commands::score(&answers, &rules, cli.pretty)?
        }
        Command::Decode { code } => {
            let rules = commands::load_rules(cli.rules.as_deref())?;
            let answers = commands::parse_share_input(&code)?;
            commands::score(&answers, &rules, cli.pretty)?
        }
        Command::Encode { answers } => commands::encode(&commands::read_answers(&answers)?),
        Command::Rules => {
            let rules = commands::load_rules(cli.rules.as_deref())?;
            commands::rules(&rules, cli.pretty)?
        }
        Command::Registry => commands::registry(cli.pretty)?,
    };

    println!("{output}");
    Ok(())
}

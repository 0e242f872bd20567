use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};

use strands_scraper::api::{DictionaryApi, PageClient};
use strands_scraper::commands;
use strands_scraper::core::config::{self, ResolvedConfig};
use strands_scraper::core::store::WORDS_FILE;

#[derive(Parser)]
#[command(name = "strands", about = "Collects daily Strands puzzle data as JSON files")]
struct Args {
    /// Directory the JSON files are written to
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,

    /// Log debug output to the terminal as well as the log file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape the letter grid into BOARD.json
    Board {
        /// Puzzle date (YYYY-MM-DD), defaults to today
        date: Option<NaiveDate>,
    },
    /// Scrape theme, spangram and answers into WORDS.json
    Answers {
        /// Puzzle date (YYYY-MM-DD), defaults to today
        date: Option<NaiveDate>,
    },
    /// Harvest hint words from the game page into HINTS_<date>.json
    Hints {
        /// Puzzle date (YYYY-MM-DD), defaults to today
        date: Option<NaiveDate>,
    },
    /// Look up definitions for the words in WORDS.json
    Define {
        /// Words file to read (defaults to WORDS.json in the output directory)
        #[arg(short, long)]
        words: Option<PathBuf>,
    },
    /// Print the hint words found in a local JSON file
    Extract {
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_ignore_str("html5ever")
        .add_filter_ignore_str("selectors")
        .build();

    let term_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        term_level,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));

    // File logger - writes to strands.log in current directory
    if let Ok(log_file) = File::create("strands.log") {
        loggers.push(WriteLogger::new(LevelFilter::Debug, log_config, log_file));
    }

    let _ = CombinedLogger::init(loggers);
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn page_client(config: &ResolvedConfig) -> Result<PageClient, Box<dyn Error>> {
    Ok(PageClient::new(&config.site_base_url, &config.user_agent)?)
}

async fn run(command: Command, config: ResolvedConfig) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Board { date } => {
            let date = date.unwrap_or_else(today);
            log::info!("Scraping Strands game board for {}...", date);
            let (record, path) = commands::scrape_board(&page_client(&config)?, date, &config.output_dir).await?;
            println!("Strands game board for {}:", date);
            println!("{}", record.board.render());
            println!("Board exported to {}", path.display());
        }
        Command::Answers { date } => {
            let date = date.unwrap_or_else(today);
            let record = commands::scrape_answers(&page_client(&config)?, date, &config.output_dir).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Hints { date } => {
            let date = date.unwrap_or_else(today);
            let (record, path) = commands::scrape_hints(&page_client(&config)?, date, &config.output_dir).await?;
            println!("{} hint words saved to {}", record.words.len(), path.display());
        }
        Command::Define { words } => {
            let words_path = words.unwrap_or_else(|| config.output_dir.join(WORDS_FILE));
            let source = DictionaryApi::new(&config.dictionary_base_url, &config.user_agent)?;
            let (definitions, path) = commands::run_define(
                &source,
                &words_path,
                &config.output_dir,
                &config.fallback_definition,
                config.request_delay,
            )
            .await?;
            println!("{} definitions stored in {}", definitions.len(), path.display());
        }
        Command::Extract { file } => {
            let words = commands::extract_file(&file)?;
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();
    init_logging(args.verbose);

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config, args.out.as_deref());
    log::debug!("Resolved config: {:?}", resolved);

    match run(args.command, resolved).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

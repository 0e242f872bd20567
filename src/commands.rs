//! # Commands
//!
//! One function per CLI subcommand. Each one wires an adapter from
//! [`crate::api`] to a parser from [`crate::scrape`] and hands the result to
//! [`crate::core::store`].
//!
//! ```text
//! board    game page    → #board cells      → BOARD.json
//! answers  answers page → hints-for-today   → WORDS.json
//! hints    game page    → astro-island JSON → HINTS_<date>.json
//! define   WORDS.json   → dictionary API    → DEFINE.json
//! extract  local JSON   → hint words        → stdout
//! ```

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use log::{error, info, warn};
use serde_json::Value;

use crate::api::{DefinitionSource, PageClient, answers_path, game_path};
use crate::core::collect_hint_words;
use crate::core::puzzle::{BoardRecord, Definitions, HintsRecord, WordsRecord};
use crate::core::store::{self, DEFINE_FILE, WORDS_FILE};
use crate::core::text::{fallback_definition, join_words, mask_word, split_words};
use crate::scrape::{self, ScrapeError};

fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Scrape the letter grid and export it. Returns the record and where it went.
pub async fn scrape_board(
    client: &PageClient,
    date: NaiveDate,
    out_dir: &Path,
) -> Result<(BoardRecord, PathBuf), Box<dyn Error>> {
    let html = client.fetch_html(&game_path(date)).await?;
    let board = scrape::parse_board(&html)?;
    if board.is_blank() {
        warn!("Board for {} has no letters", date);
    }

    let record = BoardRecord {
        date: date_string(date),
        board,
    };
    let path = store::write_first_available(&store::board_candidates(out_dir), &record)?;
    info!("Board exported to {}", path.display());
    Ok((record, path))
}

/// Scrape theme, spangram and word list into `WORDS.json`.
///
/// On failure a placeholder record is still written so downstream readers
/// find a well-formed file, and the original error is returned.
pub async fn scrape_answers(
    client: &PageClient,
    date: NaiveDate,
    out_dir: &Path,
) -> Result<WordsRecord, Box<dyn Error>> {
    let path = out_dir.join(WORDS_FILE);

    let page = match fetch_answers(client, date).await {
        Ok(page) => page,
        Err(e) => {
            error!("An error occurred while scraping: {}", e);
            store::write_json(&path, &WordsRecord::placeholder(&date_string(date)))?;
            warn!("Default data saved to {} due to scraping error", path.display());
            return Err(e);
        }
    };

    let record = WordsRecord {
        date: date_string(date),
        theme: page.theme,
        spangram: page.spangram,
        words: join_words(&page.words),
    };
    store::write_json(&path, &record)?;
    info!("Answers saved to {}", path.display());
    Ok(record)
}

async fn fetch_answers(client: &PageClient, date: NaiveDate) -> Result<scrape::AnswersPage, Box<dyn Error>> {
    let html = client.fetch_html(&answers_path(date)).await?;
    Ok(scrape::parse_answers(&html)?)
}

/// Harvest hint words from the game page's embedded props.
pub async fn scrape_hints(
    client: &PageClient,
    date: NaiveDate,
    out_dir: &Path,
) -> Result<(HintsRecord, PathBuf), Box<dyn Error>> {
    let html = client.fetch_html(&game_path(date)).await?;
    let props = scrape::parse_props(&html)?
        .ok_or(ScrapeError::MissingElement("astro-island props"))?;

    let record = HintsRecord {
        date: date_string(date),
        words: collect_hint_words(&props),
    };
    info!("Harvested {} hint words", record.words.len());

    let path = out_dir.join(store::hints_file_name(&record.date));
    store::write_json(&path, &record)?;
    Ok((record, path))
}

/// Look up every word of `record`, in order, one request at a time.
///
/// Definitions are masked so they don't give the answer away. Words with no
/// usable definition, or whose lookup failed, get the fallback text.
pub async fn define_words(
    source: &dyn DefinitionSource,
    record: &WordsRecord,
    fallback_template: &str,
    delay: Duration,
) -> Definitions {
    let mut definitions = Definitions::new();

    for (i, word) in split_words(&record.words).into_iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        info!("Fetching definition for {} from {}", word, source.name());

        let definition = match source.define(&word).await {
            Ok(Some(text)) => mask_word(&text, &word),
            Ok(None) => fallback_definition(fallback_template, &word, &record.theme),
            Err(e) => {
                warn!("Lookup failed for {}: {}", word, e);
                fallback_definition(fallback_template, &word, &record.theme)
            }
        };
        definitions.insert(word, definition);
    }

    definitions
}

/// Read `words_path`, define every word and write `DEFINE.json`.
pub async fn run_define(
    source: &dyn DefinitionSource,
    words_path: &Path,
    out_dir: &Path,
    fallback_template: &str,
    delay: Duration,
) -> Result<(Definitions, PathBuf), Box<dyn Error>> {
    let record = store::read_words_record(words_path)
        .map_err(|e| format!("could not read {}: {}", words_path.display(), e))?;

    let definitions = define_words(source, &record, fallback_template, delay).await;

    let path = out_dir.join(DEFINE_FILE);
    store::write_json(&path, &definitions)?;
    info!("Definitions stored in {}", path.display());
    Ok((definitions, path))
}

/// Run the extractor over a JSON file on disk.
pub fn extract_file(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    Ok(collect_hint_words(&value))
}

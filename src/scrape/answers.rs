//! The daily answers article. All the data sits in `div#hints-for-today`:
//!
//! ```text
//! div#hints-for-today
//! ├── div.bg-green-200 > p.font-bold      theme
//! ├── div.bg-blue-100 (last) > p.font-bold "Today's spangram - WORD"
//! └── div.bg-green-100 (last) > ul > li*  theme words
//! ```

use log::info;
use scraper::{ElementRef, Html};

use super::{ScrapeError, element_text, selector};
use crate::core::text::spangram_from_label;

#[derive(Debug, Clone, PartialEq)]
pub struct AnswersPage {
    pub theme: String,
    pub spangram: String,
    pub words: Vec<String>,
}

pub fn parse_answers(html: &str) -> Result<AnswersPage, ScrapeError> {
    let document = Html::parse_document(html);
    let hints = document
        .select(&selector("div#hints-for-today")?)
        .next()
        .ok_or(ScrapeError::MissingElement("'hints-for-today' div"))?;

    let bold = selector("p.font-bold")?;

    let theme_div = hints
        .select(&selector("div.bg-green-200")?)
        .next()
        .ok_or(ScrapeError::MissingElement("theme div"))?;
    let theme = theme_div
        .select(&bold)
        .next()
        .map(element_text)
        .ok_or(ScrapeError::MissingElement("theme text"))?;
    info!("Theme: {}", theme);

    let spangram_div = last_match(hints, "div.bg-blue-100")?
        .ok_or(ScrapeError::MissingElement("spangram div"))?;
    let spangram = spangram_div
        .select(&bold)
        .next()
        .map(|p| spangram_from_label(&p.text().collect::<String>()))
        .ok_or(ScrapeError::MissingElement("spangram text"))?;
    info!("Spangram: {}", spangram);

    let words_div = last_match(hints, "div.bg-green-100")?
        .ok_or(ScrapeError::MissingElement("words div"))?;
    let words_ul = words_div
        .select(&selector("ul")?)
        .next()
        .ok_or(ScrapeError::MissingElement("words list"))?;
    let words: Vec<String> = words_ul
        .select(&selector("li")?)
        .map(element_text)
        .collect();
    info!("Words: {}", words.join(", "));

    Ok(AnswersPage {
        theme,
        spangram,
        words,
    })
}

/// Several boxes share a class; the page puts the one we want last.
fn last_match<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>, ScrapeError> {
    Ok(scope.select(&selector(css)?).last())
}

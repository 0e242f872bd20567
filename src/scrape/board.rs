use log::debug;
use scraper::Html;

use super::{ScrapeError, element_text, selector};
use crate::core::puzzle::{BOARD_COLS, BOARD_ROWS, Board, EMPTY_CELL};

/// Reads the letter grid out of the game page.
///
/// Each cell is a `div[data-x][data-y]` under `#board` with the letter in a
/// `.relative` child. Cells the page leaves out become [`EMPTY_CELL`].
pub fn parse_board(html: &str) -> Result<Board, ScrapeError> {
    let document = Html::parse_document(html);
    let board_el = document
        .select(&selector("#board")?)
        .next()
        .ok_or(ScrapeError::MissingElement("the game board (#board)"))?;

    let mut rows = Vec::with_capacity(BOARD_ROWS);
    for y in 0..BOARD_ROWS {
        let mut row = Vec::with_capacity(BOARD_COLS);
        for x in 0..BOARD_COLS {
            let cell = selector(&format!(r#"div[data-x="{x}"][data-y="{y}"] .relative"#))?;
            let letter = board_el
                .select(&cell)
                .next()
                .map(element_text)
                .unwrap_or_else(|| EMPTY_CELL.to_string());
            row.push(letter);
        }
        rows.push(row);
    }

    debug!("Parsed {}x{} board", BOARD_ROWS, BOARD_COLS);
    Ok(Board(rows))
}

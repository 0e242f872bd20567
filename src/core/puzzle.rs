//! # Puzzle Records
//!
//! The shapes written to disk. Field names match the JSON files that the
//! front end already reads, so renaming anything here breaks it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const BOARD_ROWS: usize = 8;
pub const BOARD_COLS: usize = 6;

/// Placeholder for a cell the page did not render.
pub const EMPTY_CELL: &str = " ";

/// The letter grid, `BOARD_ROWS` rows of `BOARD_COLS` cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Board(pub Vec<Vec<String>>);

impl Board {
    /// Rows joined with single spaces, one row per line.
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True when every cell is the empty placeholder.
    pub fn is_blank(&self) -> bool {
        self.0.iter().flatten().all(|cell| cell == EMPTY_CELL)
    }
}

/// `BOARD.json`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoardRecord {
    pub date: String,
    pub board: Board,
}

/// `WORDS.json`. `words` stays a single `", "`-joined string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordsRecord {
    pub date: String,
    pub theme: String,
    pub spangram: String,
    pub words: String,
}

impl WordsRecord {
    /// Written in place of real data when the answers page can't be scraped,
    /// so the front end still has something to load.
    pub fn placeholder(date: &str) -> Self {
        Self {
            date: date.to_string(),
            theme: "Error occurred".to_string(),
            spangram: "Error".to_string(),
            words: "Error, Scraping, Failed".to_string(),
        }
    }
}

/// `HINTS_<date>.json`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HintsRecord {
    pub date: String,
    pub words: Vec<String>,
}

/// `DEFINE.json`: word → definition, kept in insertion order.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Definitions(IndexMap<String, String>);

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces. A replaced entry keeps its original position.
    pub fn insert(&mut self, word: String, definition: String) {
        self.0.insert(word, definition);
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.0.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board(vec![
            vec!["A".into(), "B".into()],
            vec!["C".into(), EMPTY_CELL.into()],
        ])
    }

    #[test]
    fn test_board_render() {
        assert_eq!(sample_board().render(), "A B\nC  ");
    }

    #[test]
    fn test_board_is_blank() {
        assert!(!sample_board().is_blank());
        let blank = Board(vec![vec![EMPTY_CELL.to_string(); BOARD_COLS]; BOARD_ROWS]);
        assert!(blank.is_blank());
    }

    #[test]
    fn test_board_record_serializes_grid_directly() {
        let record = BoardRecord {
            date: "2024-10-18".to_string(),
            board: sample_board(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"date": "2024-10-18", "board": [["A", "B"], ["C", " "]]})
        );
    }

    #[test]
    fn test_words_placeholder() {
        let record = WordsRecord::placeholder("2024-10-18");
        assert_eq!(record.theme, "Error occurred");
        assert_eq!(record.spangram, "Error");
        assert_eq!(record.words, "Error, Scraping, Failed");
    }

    #[test]
    fn test_definitions_keep_insertion_order() {
        let mut defs = Definitions::new();
        defs.insert("TUNER".into(), "one".into());
        defs.insert("CABLE".into(), "two".into());
        defs.insert("TUNER".into(), "three".into());

        assert_eq!(defs.len(), 2);
        assert_eq!(defs.get("TUNER"), Some("three"));
        let json = serde_json::to_string(&defs).unwrap();
        assert_eq!(json, r#"{"TUNER":"three","CABLE":"two"}"#);
    }
}

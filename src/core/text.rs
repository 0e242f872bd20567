//! Small text transforms applied to scraped fields before they are persisted.

/// Separator used for the flat `words` string in `WORDS.json`.
pub const WORD_SEPARATOR: &str = ", ";

/// Hides the answer inside its own definition.
///
/// Only the lowercase spelling is matched, so "Remote" in a definition for
/// `REMOTE` survives while "remote" is blanked.
pub fn mask_word(definition: &str, word: &str) -> String {
    let needle = word.to_lowercase();
    if needle.is_empty() {
        return definition.to_string();
    }
    definition.replace(&needle, &"_".repeat(word.chars().count()))
}

/// The answers page labels the spangram as `"Today's spangram - WORD"`.
/// Takes whatever follows the last `"- "`.
pub fn spangram_from_label(label: &str) -> String {
    label
        .rsplit("- ")
        .next()
        .unwrap_or(label)
        .trim()
        .to_string()
}

pub fn join_words(words: &[String]) -> String {
    words.join(WORD_SEPARATOR)
}

/// Inverse of [`join_words`]. Blank entries are dropped.
pub fn split_words(joined: &str) -> Vec<String> {
    joined
        .split(WORD_SEPARATOR)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fills a fallback template. Supports `{len}` (letter count) and `{theme}`.
pub fn fallback_definition(template: &str, word: &str, theme: &str) -> String {
    template
        .replace("{len}", &word.chars().count().to_string())
        .replace("{theme}", theme)
}

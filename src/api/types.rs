//! Response shapes of the free dictionary API (`/api/v2/entries/en/<word>`).
//! Only the fields we read are modeled; everything else is ignored.

use serde::Deserialize;

/// A 200 response is normally an array of entries. Anything else is kept
/// as raw JSON and treated as "no definition".
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum DictionaryResponse {
    Entries(Vec<DictionaryEntry>),
    Other(serde_json::Value),
}

#[derive(Deserialize, Debug, Clone)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Meaning {
    #[serde(default)]
    pub definitions: Vec<DefinitionEntry>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DefinitionEntry {
    #[serde(default)]
    pub definition: String,
}

impl DictionaryResponse {
    /// The first definition of the first meaning of the first entry, if non-empty.
    pub fn first_definition(&self) -> Option<&str> {
        match self {
            DictionaryResponse::Entries(entries) => entries
                .first()?
                .meanings
                .first()?
                .definitions
                .first()
                .map(|d| d.definition.as_str())
                .filter(|d| !d.is_empty()),
            DictionaryResponse::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DictionaryResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_definition_picks_first_of_first() {
        let response = parse(
            r#"[{"word":"tuner","meanings":[
                {"partOfSpeech":"noun","definitions":[{"definition":"One who tunes."},{"definition":"Second."}]},
                {"partOfSpeech":"verb","definitions":[{"definition":"Other."}]}
            ]},{"word":"tuner","meanings":[]}]"#,
        );
        assert_eq!(response.first_definition(), Some("One who tunes."));
    }

    #[test]
    fn test_missing_pieces_yield_none() {
        assert_eq!(parse("[]").first_definition(), None);
        assert_eq!(parse(r#"[{"meanings":[]}]"#).first_definition(), None);
        assert_eq!(parse(r#"[{"meanings":[{"definitions":[]}]}]"#).first_definition(), None);
        assert_eq!(parse(r#"[{"meanings":[{"definitions":[{}]}]}]"#).first_definition(), None);
    }

    #[test]
    fn test_non_array_body_is_other() {
        let response = parse(r#"{"title":"No Definitions Found"}"#);
        assert!(matches!(response, DictionaryResponse::Other(_)));
        assert_eq!(response.first_definition(), None);
    }
}

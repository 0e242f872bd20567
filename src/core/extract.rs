//! # Hint Word Extraction
//!
//! The game page embeds its data as an Astro island whose `props` attribute is
//! a JSON blob. Astro serializes every value as a `[type_tag, value]` pair, so
//! the words we want always sit at index 1 of some small array.
//!
//! ```text
//! {"grid": [["a","CAT"], ["b","DOG"], "noise", ["c", ["n","FISH"]]]}
//!                  ▲            ▲                        ▲
//!                harvested    harvested         not a string at [1]:
//!                                                descend, harvest FISH
//! ```
//!
//! The walk uses an explicit stack rather than recursion. Page data is
//! untrusted, and a deeply nested blob must not be able to blow the call stack.

use serde_json::Value;

/// Pending work on the traversal stack.
enum Step<'a> {
    /// Walk into a value.
    Visit(&'a Value),
    /// A word harvested from a pair; emitted when popped so sibling order holds.
    Emit(&'a str),
}

/// Returns the harvested word if `item` is pair-shaped: an array of at least
/// two elements whose second element is a string.
fn pair_word(item: &Value) -> Option<&str> {
    match item {
        Value::Array(pair) if pair.len() >= 2 => pair[1].as_str(),
        _ => None,
    }
}

/// Walks `value` depth-first and collects every hint word in traversal order.
///
/// - Objects: every value (never a key), in the object's iteration order.
/// - Arrays: a pair-shaped element contributes its index-1 string directly;
///   anything else is walked with these same rules.
/// - Scalars reached on their own contribute nothing.
///
/// The result may contain duplicates. See [`collect_hint_words`] for the
/// de-duplicated, sorted form that gets persisted.
pub fn extract_words(value: &Value) -> Vec<String> {
    let mut words = Vec::new();
    let mut stack = vec![Step::Visit(value)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Emit(word) => words.push(word.to_string()),
            Step::Visit(Value::Object(map)) => {
                // Reversed so the first value is popped first
                stack.extend(map.values().rev().map(Step::Visit));
            }
            Step::Visit(Value::Array(items)) => {
                for item in items.iter().rev() {
                    match pair_word(item) {
                        Some(word) => stack.push(Step::Emit(word)),
                        None => stack.push(Step::Visit(item)),
                    }
                }
            }
            Step::Visit(_) => {}
        }
    }

    words
}

/// Extracts hint words, then removes duplicates and sorts them.
pub fn collect_hint_words(value: &Value) -> Vec<String> {
    let mut words = extract_words(value);
    words.sort();
    words.dedup();
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_containers_yield_nothing() {
        assert!(extract_words(&json!({})).is_empty());
        assert!(extract_words(&json!([])).is_empty());
    }

    #[test]
    fn test_top_level_scalars_yield_nothing() {
        for value in [json!(null), json!(true), json!(3.5), json!("CAT")] {
            assert!(extract_words(&value).is_empty(), "scalar {value} leaked a word");
        }
    }

    #[test]
    fn test_pairs_harvest_second_item_in_order() {
        let value = json!([["l1", "w1"], ["l2", "w2"], ["l3", "w3", "extra"]]);
        assert_eq!(extract_words(&value), vec!["w1", "w2", "w3"]);
    }

    #[test]
    fn test_label_is_never_harvested() {
        let value = json!([["label", "word"]]);
        let words = extract_words(&value);
        assert_eq!(words, vec!["word"]);
        assert!(!words.contains(&"label".to_string()));
    }

    #[test]
    fn test_object_concatenates_values_in_key_order() {
        let value = json!({
            "a": [["x", "first"]],
            "b": [["y", "second"], ["z", "third"]],
        });
        let a = extract_words(&value["a"]);
        let b = extract_words(&value["b"]);
        let expected: Vec<String> = a.into_iter().chain(b).collect();
        assert_eq!(extract_words(&value), expected);
        assert_eq!(extract_words(&value), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_object_keys_follow_document_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta": [["t","Z"]], "alpha": [["t","A"]]}"#).unwrap();
        assert_eq!(extract_words(&value), vec!["Z", "A"]);
    }

    #[test]
    fn test_object_keys_are_ignored() {
        let value = json!({"KEY": [], "OTHER": {"NESTED": []}});
        assert!(extract_words(&value).is_empty());
    }

    #[test]
    fn test_nested_object_with_pairs() {
        let value = json!({"x": [["l1", "w1"], ["l2", "w2"]]});
        assert_eq!(extract_words(&value), vec!["w1", "w2"]);
    }

    #[test]
    fn test_bare_scalar_sequence_yields_nothing() {
        assert!(extract_words(&json!(["a", "b", "c"])).is_empty());
    }

    #[test]
    fn test_non_string_second_item_is_walked_not_harvested() {
        assert!(extract_words(&json!([["label", 42]])).is_empty());
        assert!(extract_words(&json!(["label", 42])).is_empty());
    }

    #[test]
    fn test_single_element_array_is_not_a_pair() {
        assert!(extract_words(&json!([["only"]])).is_empty());
    }

    #[test]
    fn test_grid_scenario() {
        let value = json!({
            "grid": [["a", "CAT"], ["b", "DOG"], "ignored-scalar", ["c", ["n", "FISH"]]]
        });
        assert_eq!(extract_words(&value), vec!["CAT", "DOG", "FISH"]);
    }

    #[test]
    fn test_order_is_depth_first_preorder() {
        let value = json!([
            ["a", "ONE"],
            [0, [["b", "TWO"], ["c", "THREE"]]],
            ["d", "FOUR"],
        ]);
        assert_eq!(extract_words(&value), vec!["ONE", "TWO", "THREE", "FOUR"]);
    }

    #[test]
    fn test_astro_props_shape() {
        let props: Value = serde_json::from_str(
            r#"{"date":[0,"2024-10-18"],"words":[1,[[0,"TUNER"],[0,"REMOTE"]]],"spangram":[0,"CHANNELSURF"]}"#,
        )
        .unwrap();
        // Top-level [tag, value] pairs are plain arrays of scalars, so only
        // the entries of the nested word array are harvested
        assert_eq!(extract_words(&props), vec!["TUNER", "REMOTE"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let value = json!({"g": [["a", "X"], ["b", "Y"], ["c", "X"]]});
        assert_eq!(extract_words(&value), extract_words(&value));
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        // serde_json's parser caps nesting at 128, so build the value by hand
        let mut value = json!(["x", "DEEP"]);
        for _ in 0..100_000 {
            value = Value::Array(vec![value]);
        }
        assert_eq!(extract_words(&value), vec!["DEEP"]);

        // Unwind by hand too; the default recursive drop would overflow
        let mut current = value;
        while let Value::Array(mut items) = current {
            current = items.pop().unwrap_or(Value::Null);
        }
    }

    #[test]
    fn test_collect_hint_words_dedups_and_sorts() {
        let value = json!({"g": [["a", "TUNER"], ["b", "REMOTE"], ["c", "TUNER"], ["d", "CABLE"]]});
        assert_eq!(collect_hint_words(&value), vec!["CABLE", "REMOTE", "TUNER"]);
    }
}

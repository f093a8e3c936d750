//! Answer capture transforms.
//!
//! Stateless helpers that fold respondent input into answer payloads.
//! Inputs are taken by reference and a new payload is returned, so
//! repeated application with the same arguments is idempotent. Capture
//! never validates against the question; grading is where mismatches
//! surface.

use std::collections::BTreeMap;

/// Place an item under a category. First placement wins: if the item is
/// already placed under any category the call is a no-op, not a move.
pub fn place_item(
    placements: &BTreeMap<String, Vec<String>>,
    item: &str,
    category: &str,
) -> BTreeMap<String, Vec<String>> {
    let mut next = placements.clone();
    let already_placed = next.values().any(|items| items.iter().any(|i| i == item));
    if !already_placed {
        next.entry(category.to_string())
            .or_default()
            .push(item.to_string());
    }
    next
}

/// Write a blank value at `index`, padding with empty strings up to the
/// index if the list is shorter.
pub fn set_blank(blanks: &[String], index: usize, value: &str) -> Vec<String> {
    let mut next = blanks.to_vec();
    if next.len() <= index {
        next.resize(index + 1, String::new());
    }
    next[index] = value.to_string();
    next
}

/// Record a selected option for a sub-question. Last write wins. The
/// option index is not checked against the question; grading treats an
/// out-of-range selection as incorrect.
pub fn select_option(
    selections: &BTreeMap<usize, usize>,
    sub_index: usize,
    option_index: usize,
) -> BTreeMap<usize, usize> {
    let mut next = selections.clone();
    next.insert(sub_index, option_index);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_item_appends_to_category() {
        let placements = BTreeMap::new();
        let placements = place_item(&placements, "Dolphin", "Mammals");
        assert_eq!(placements["Mammals"], vec!["Dolphin"]);
    }

    #[test]
    fn place_item_is_idempotent() {
        let placements = BTreeMap::new();
        let once = place_item(&placements, "Dolphin", "Mammals");
        let twice = place_item(&once, "Dolphin", "Mammals");
        assert_eq!(once, twice);
    }

    #[test]
    fn first_placement_wins_across_categories() {
        let placements = BTreeMap::new();
        let placements = place_item(&placements, "Dolphin", "Fish");
        let placements = place_item(&placements, "Dolphin", "Mammals");
        assert_eq!(placements["Fish"], vec!["Dolphin"]);
        assert!(!placements.contains_key("Mammals"));
    }

    #[test]
    fn place_item_leaves_input_untouched() {
        let placements = BTreeMap::new();
        let _ = place_item(&placements, "Dolphin", "Mammals");
        assert!(placements.is_empty());
    }

    #[test]
    fn set_blank_pads_with_empty_strings() {
        let blanks = set_blank(&[], 2, "dog");
        assert_eq!(blanks, vec!["", "", "dog"]);
    }

    #[test]
    fn set_blank_overwrites_in_place() {
        let blanks = vec!["fox".to_string(), "dog".to_string()];
        let blanks = set_blank(&blanks, 0, "cat");
        assert_eq!(blanks, vec!["cat", "dog"]);
    }

    #[test]
    fn select_option_last_write_wins() {
        let selections = BTreeMap::new();
        let selections = select_option(&selections, 0, 1);
        let selections = select_option(&selections, 0, 3);
        assert_eq!(selections[&0], 3);
        assert_eq!(selections.len(), 1);
    }
}

//! Priority ordering for part-program files
//!
//! The machining order inside a cabinet follows three bands: structural
//! parts first (sides, bottoms, tops, center panels), unclassified parts
//! alphabetically in the middle, and closing parts (doors, fronts,
//! drawer faces) last. The token tables are curated domain vocabulary
//! and their order is significant.

use std::path::Path;

/// Structural part tokens, highest priority first.
const PRIORITY_ORDER: &[&str] = &[
    "BOK", "BKP", "BKL", "DNO", "STROP", "STR", "STD", "MV", "MK", "MVL", "MVP", "MKL", "MKP",
    "MKS", "MVS",
];

/// Closing-part tokens, ordered among themselves; these always sort last.
const LAST_PRIORITY_ORDER: &[&str] = &[
    "DV", "DVL", "DVP", "DVERE", "CZ", "CZL", "CZP", "CZH", "CZD", "DVH", "DVD",
];

/// Sort key for one file name: (band, token index or lexicographic stem).
///
/// Band 0 = structural, band 1 = unclassified, band 2 = closing. Within
/// bands 0 and 2 the key is the index of the first matching token in
/// table order; within band 1 it is the base name itself.
fn file_priority(file_name: &str) -> (u8, usize, String) {
    let base_name = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    for (index, token) in PRIORITY_ORDER.iter().enumerate() {
        if base_name.contains(token) {
            return (0, index, String::new());
        }
    }
    for (index, token) in LAST_PRIORITY_ORDER.iter().enumerate() {
        if base_name.contains(token) {
            return (2, index, String::new());
        }
    }
    (1, 0, base_name.to_string())
}

/// Sort file names into machining order.
///
/// The sort is stable, so names with the same key keep their relative
/// input order. Callers pass names in lexicographic order to make ties
/// deterministic.
pub fn sort_files(mut file_names: Vec<String>) -> Vec<String> {
    file_names.sort_by_cached_key(|name| file_priority(name));
    file_names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_structural_before_unclassified_before_closing() {
        let sorted = sort_files(names(&["CZ1.ganx", "BOK2.ganx", "XYZ.ganx", "DVP1.ganx"]));
        // DVP1 keys on "DV" (index 0), CZ1 on "CZ" (index 4).
        assert_eq!(sorted, names(&["BOK2.ganx", "XYZ.ganx", "DVP1.ganx", "CZ1.ganx"]));
    }

    #[test]
    fn test_structural_tokens_keep_table_order() {
        let sorted = sort_files(names(&["STROP1.ganx", "DNO1.ganx", "BOK1.ganx", "BKL1.ganx"]));
        assert_eq!(
            sorted,
            names(&["BOK1.ganx", "BKL1.ganx", "DNO1.ganx", "STROP1.ganx"])
        );
    }

    #[test]
    fn test_unclassified_middle_is_alphabetical() {
        let sorted = sort_files(names(&["ZZZ.ganx", "AAA.ganx", "MMM.ganx"]));
        assert_eq!(sorted, names(&["AAA.ganx", "MMM.ganx", "ZZZ.ganx"]));
    }

    #[test]
    fn test_first_matching_token_wins() {
        // "MVL1" contains "MV" (index 7) before "MVL" (index 9) is reached.
        assert_eq!(file_priority("MVL1.ganx"), (0, 7, String::new()));
        // "DVERE" contains "DV" at index 0.
        assert_eq!(file_priority("DVERE.ganx"), (2, 0, String::new()));
    }

    #[test]
    fn test_deterministic() {
        let input = names(&["CZ9.ganx", "BOK1.ganx", "Q.ganx", "DNO3.ganx", "A.ganx"]);
        let once = sort_files(input.clone());
        let twice = sort_files(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        // Both key on ("BOK", 0); input order is preserved.
        let sorted = sort_files(names(&["BOK9.ganx", "BOK1.ganx"]));
        assert_eq!(sorted, names(&["BOK9.ganx", "BOK1.ganx"]));
    }

    #[test]
    fn test_inserting_sorted_element_is_stable() {
        let base = sort_files(names(&["BOK1.ganx", "KLM.ganx", "CZ1.ganx"]));
        let mut with_extra = base.clone();
        with_extra.insert(1, "DNO1.ganx".to_string());
        assert_eq!(sort_files(with_extra.clone()), with_extra);
    }

    #[test]
    fn test_extension_is_ignored() {
        assert_eq!(file_priority("BOK1.ganx").0, 0);
        assert_eq!(file_priority("BOK1").0, 0);
    }
}

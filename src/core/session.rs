//! Interactive review session state
//!
//! Holds the mutable state of one per-cabinet review pass: the working
//! machining order and the entered quantities. The presentation layer
//! re-renders from this state after every mutation; nothing here touches
//! the filesystem.

use std::collections::BTreeMap;

/// Direction for a single-step reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Parse a raw quantity string with the default-on-failure policy.
///
/// Anything that is not a positive integer yields the default of 1.
pub fn parse_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => 1,
    }
}

/// Mutable state for the cabinet currently under review.
#[derive(Debug, Default)]
pub struct ReviewSession {
    /// Cabinet folder names for the whole run; empty in single-cabinet mode
    pub cabinets: Vec<String>,
    /// 0-based cursor into `cabinets`
    pub current_index: usize,
    /// Working machining order (file names) for the current cabinet
    pub working_order: Vec<String>,
    /// Entered quantity per file name; absent means the default of 1
    quantities: BTreeMap<String, u32>,
}

impl ReviewSession {
    /// Start a session over the given cabinets with the first cabinet's
    /// default order loaded.
    pub fn new(cabinets: Vec<String>, initial_order: Vec<String>) -> Self {
        ReviewSession {
            cabinets,
            current_index: 0,
            working_order: initial_order,
            quantities: BTreeMap::new(),
        }
    }

    /// Name of the cabinet currently under review, if any.
    pub fn current_cabinet(&self) -> Option<&str> {
        self.cabinets.get(self.current_index).map(String::as_str)
    }

    /// Number of cabinets in the run; 1 in single-cabinet mode.
    pub fn total(&self) -> usize {
        self.cabinets.len().max(1)
    }

    /// Move the part at `index` one position up or down. Out-of-range
    /// indices and moves past either end are no-ops.
    pub fn reorder(&mut self, index: usize, direction: Direction) {
        match direction {
            Direction::Up => {
                if index > 0 && index < self.working_order.len() {
                    self.working_order.swap(index, index - 1);
                }
            }
            Direction::Down => {
                if index + 1 < self.working_order.len() {
                    self.working_order.swap(index, index + 1);
                }
            }
        }
    }

    /// Store a quantity from raw operator input.
    pub fn set_quantity(&mut self, name: &str, raw: &str) {
        self.quantities.insert(name.to_string(), parse_quantity(raw));
    }

    /// Add `delta` to a part's quantity, clamped to `1..=u32::MAX`.
    pub fn adjust_quantity(&mut self, name: &str, delta: i32) {
        let current = self.quantity(name) as i64;
        let adjusted = (current + delta as i64).clamp(1, u32::MAX as i64) as u32;
        self.quantities.insert(name.to_string(), adjusted);
    }

    /// Current quantity for a part, defaulting to 1.
    pub fn quantity(&self, name: &str) -> u32 {
        self.quantities.get(name).copied().unwrap_or(1)
    }

    /// Snapshot of the entered quantities for document generation.
    pub fn quantities(&self) -> BTreeMap<String, u32> {
        self.quantities.clone()
    }

    /// Advance to the next cabinet, resetting the working order to the
    /// given default and all quantities to 1. Returns false when no
    /// cabinets remain.
    pub fn advance(&mut self, next_order: Vec<String>) -> bool {
        self.current_index += 1;
        if self.current_index < self.cabinets.len() {
            self.working_order = next_order;
            self.quantities.clear();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(parts: &[&str]) -> ReviewSession {
        ReviewSession::new(
            vec!["Cab1".to_string()],
            parts.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5"), 5);
        assert_eq!(parse_quantity(" 3 "), 3);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-2"), 1);
    }

    #[test]
    fn test_reorder_up_and_down() {
        let mut session = session_with(&["a", "b", "c"]);
        session.reorder(2, Direction::Up);
        assert_eq!(session.working_order, vec!["a", "c", "b"]);
        session.reorder(0, Direction::Down);
        assert_eq!(session.working_order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_clamps_at_bounds() {
        let mut session = session_with(&["a", "b"]);
        session.reorder(0, Direction::Up);
        assert_eq!(session.working_order, vec!["a", "b"]);
        session.reorder(1, Direction::Down);
        assert_eq!(session.working_order, vec!["a", "b"]);
        session.reorder(99, Direction::Up);
        assert_eq!(session.working_order, vec!["a", "b"]);
    }

    #[test]
    fn test_set_quantity_defaults_on_garbage() {
        let mut session = session_with(&["a"]);
        session.set_quantity("a", "abc");
        assert_eq!(session.quantity("a"), 1);
        session.set_quantity("a", "5");
        assert_eq!(session.quantity("a"), 5);
    }

    #[test]
    fn test_adjust_quantity_clamps_to_one() {
        let mut session = session_with(&["a"]);
        session.adjust_quantity("a", -10);
        assert_eq!(session.quantity("a"), 1);
        session.adjust_quantity("a", 3);
        assert_eq!(session.quantity("a"), 4);
        session.adjust_quantity("a", -2);
        assert_eq!(session.quantity("a"), 2);
    }

    #[test]
    fn test_adjust_quantity_saturates_at_u32_max() {
        let mut session = session_with(&["a"]);
        session.set_quantity("a", &u32::MAX.to_string());
        session.adjust_quantity("a", 1);
        assert_eq!(session.quantity("a"), u32::MAX);
        session.adjust_quantity("a", -1);
        assert_eq!(session.quantity("a"), u32::MAX - 1);
    }

    #[test]
    fn test_advance_resets_state() {
        let mut session = ReviewSession::new(
            vec!["Cab1".to_string(), "Cab2".to_string()],
            vec!["a".to_string()],
        );
        session.set_quantity("a", "7");
        assert!(session.advance(vec!["x".to_string(), "y".to_string()]));
        assert_eq!(session.current_index, 1);
        assert_eq!(session.working_order, vec!["x", "y"]);
        assert_eq!(session.quantity("a"), 1);
        assert!(!session.advance(Vec::new()));
    }
}

//! # Display Indexes
//!
//! Items are identified by millisecond ids, which nobody wants to type. UI
//! clients that address rows by position use [`DisplayIndex`]: the 1-based row
//! number in the current list order. Indexes are resolved to ids right before
//! an operation runs, so they always refer to what the user last saw.
//!
//! Inputs accept single indexes (`3`) and inclusive ranges (`2-4`). A range
//! must end within the list it is applied to.

use crate::error::{Result, TodozError};
use crate::model::{ItemId, TodoList};
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based row position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(format!("Invalid index: {}", s)),
        }
    }
}

/// Parses one input that may be a single index or a range like `2-4`.
///
/// `len` is the number of rows; a range ending past it is rejected before
/// it is expanded.
pub fn parse_index_or_range(input: &str, len: usize) -> Result<Vec<DisplayIndex>> {
    if let Some((start, end)) = input.split_once('-') {
        let start = DisplayIndex::from_str(start).map_err(TodozError::Api)?;
        let end = DisplayIndex::from_str(end).map_err(TodozError::Api)?;
        if start > end {
            return Err(TodozError::Api(format!(
                "Invalid range {}: start is after end",
                input
            )));
        }
        if end.0 > len {
            return Err(not_found(end));
        }
        return Ok((start.0..=end.0).map(DisplayIndex).collect());
    }
    DisplayIndex::from_str(input)
        .map(|idx| vec![idx])
        .map_err(TodozError::Api)
}

/// Parses several inputs, expanding ranges and dropping repeats.
pub fn parse_indexes<I: AsRef<str>>(inputs: &[I], len: usize) -> Result<Vec<DisplayIndex>> {
    let mut out: Vec<DisplayIndex> = Vec::new();
    for input in inputs {
        for idx in parse_index_or_range(input.as_ref(), len)? {
            if !out.contains(&idx) {
                out.push(idx);
            }
        }
    }
    Ok(out)
}

pub fn resolve(list: &TodoList, index: DisplayIndex) -> Result<ItemId> {
    index
        .0
        .checked_sub(1)
        .and_then(|pos| list.items().get(pos))
        .map(|item| item.id)
        .ok_or_else(|| not_found(index))
}

pub fn resolve_all(list: &TodoList, indexes: &[DisplayIndex]) -> Result<Vec<ItemId>> {
    indexes.iter().map(|idx| resolve(list, *idx)).collect()
}

fn not_found(index: DisplayIndex) -> TodozError {
    TodozError::Api(format!("Index {} not found", index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn parses_single_and_range() {
        assert_eq!(parse_index_or_range("3", 5).unwrap(), vec![DisplayIndex(3)]);
        assert_eq!(
            parse_index_or_range("2-4", 5).unwrap(),
            vec![DisplayIndex(2), DisplayIndex(3), DisplayIndex(4)]
        );
    }

    #[test]
    fn rejects_zero_reversed_and_garbage() {
        assert!(parse_index_or_range("0", 5).is_err());
        assert!(parse_index_or_range("4-2", 5).is_err());
        assert!(parse_index_or_range("p1", 5).is_err());
        assert!(parse_index_or_range("1-", 5).is_err());
    }

    #[test]
    fn parse_indexes_dedups_in_first_seen_order() {
        let parsed = parse_indexes(&["3", "1-3"], 5).unwrap();
        assert_eq!(
            parsed,
            vec![DisplayIndex(3), DisplayIndex(1), DisplayIndex(2)]
        );
    }

    #[test]
    fn resolves_against_current_order() {
        let list = TodoList::from_items(vec![
            Item::new(ItemId(30), "c".into()),
            Item::new(ItemId(10), "a".into()),
        ])
        .unwrap();
        assert_eq!(resolve(&list, DisplayIndex(1)).unwrap(), ItemId(30));
        assert_eq!(
            resolve_all(&list, &[DisplayIndex(2), DisplayIndex(1)]).unwrap(),
            vec![ItemId(10), ItemId(30)]
        );
        assert!(resolve(&list, DisplayIndex(3)).is_err());
        assert!(resolve(&list, DisplayIndex(0)).is_err());
    }

    #[test]
    fn ranges_past_the_list_are_rejected_unexpanded() {
        let err = parse_index_or_range("1-18446744073709551615", 3).unwrap_err();
        assert!(err.to_string().contains("Index 18446744073709551615 not found"));
        assert!(parse_index_or_range("2-4000000000", 3).is_err());
        assert!(parse_indexes(&["1", "2-4"], 3).is_err());
        assert_eq!(parse_index_or_range("1-3", 3).unwrap().len(), 3);
    }
}

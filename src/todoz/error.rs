use crate::model::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Reorder rejected: {0}")]
    InvalidReorder(ReorderMismatch),

    #[error("Api Error: {0}")]
    Api(String),
}

/// Describes how a requested order differs from a permutation of the current ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorderMismatch {
    /// Ids present in the list but absent from the requested order.
    pub missing: Vec<ItemId>,
    /// Ids in the requested order that the list does not contain.
    pub unknown: Vec<ItemId>,
    /// Ids that appear more than once in the requested order.
    pub duplicated: Vec<ItemId>,
}

impl ReorderMismatch {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty() && self.duplicated.is_empty()
    }
}

impl std::fmt::Display for ReorderMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        for (label, ids) in [
            ("missing", &self.missing),
            ("unknown", &self.unknown),
            ("duplicated", &self.duplicated),
        ] {
            if !ids.is_empty() {
                let list: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
                parts.push(format!("{} ids [{}]", label, list.join(", ")));
            }
        }
        write!(f, "{}", parts.join("; "))
    }
}

pub type Result<T> = std::result::Result<T, TodozError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_display_lists_only_non_empty_groups() {
        let mismatch = ReorderMismatch {
            missing: vec![ItemId(1), ItemId(2)],
            unknown: vec![],
            duplicated: vec![ItemId(3)],
        };
        assert_eq!(
            mismatch.to_string(),
            "missing ids [1, 2]; duplicated ids [3]"
        );
        assert!(!mismatch.is_empty());
        assert!(ReorderMismatch::default().is_empty());
    }
}

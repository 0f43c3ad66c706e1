use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// Ad-group labels chosen for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSelection {
    labels: BTreeSet<String>,
}

impl GroupSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.labels.insert(label.into())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// True when the cell's display text is one of the selected labels.
    pub fn contains(&self, cell: &Cell) -> bool {
        cell.as_text()
            .is_some_and(|label| self.labels.contains(&label))
    }
}

impl<S: Into<String>> FromIterator<S> for GroupSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Outcome of one generation: the winner's average score and mutability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingEntry {
    pub fitness: f64,
    pub mutability: f64,
}

/// Append-only history with one entry per completed generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    entries: Vec<TrainingEntry>,
}

impl TrainingRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: TrainingEntry) {
        self.entries.push(entry);
    }

    /// Returns the entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[TrainingEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TrainingEntry> {
        self.entries.last()
    }

    /// Returns the entry with the highest fitness, earliest on ties.
    #[must_use]
    pub fn best(&self) -> Option<&TrainingEntry> {
        self.entries
            .iter()
            .reduce(|best, e| if e.fitness > best.fitness { e } else { best })
    }
}

//! Record of past guesses.

use chrono::{DateTime, Utc};

use crate::color::HexColor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The answer of the round that was guessed.
    pub color: HexColor,
    pub is_correct: bool,
    pub guessed_at: DateTime<Utc>,
}

/// Guesses in the order they were made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, color: HexColor, is_correct: bool) {
        self.entries.push(HistoryEntry {
            color,
            is_correct,
            guessed_at: Utc::now(),
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Newest first, paired with the 1-based number of the guess.
    pub fn newest_first(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        let len = self.entries.len();
        self.entries
            .iter()
            .rev()
            .enumerate()
            .map(move |(i, entry)| (len - i, entry))
    }

    /// Entry at `index` in newest-first order.
    pub fn get_newest_first(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.iter().rev().nth(index)
    }

    pub fn correct_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_correct).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_numbering() {
        let mut history = History::new();
        let red = HexColor::from_rgb(255, 0, 0);
        let green = HexColor::from_rgb(0, 255, 0);
        let blue = HexColor::from_rgb(0, 0, 255);

        history.push(red, true);
        history.push(green, false);
        history.push(blue, true);

        let listed: Vec<(usize, HexColor, bool)> = history
            .newest_first()
            .map(|(n, e)| (n, e.color, e.is_correct))
            .collect();

        assert_eq!(
            listed,
            vec![(3, blue, true), (2, green, false), (1, red, true)]
        );
        assert_eq!(history.get_newest_first(0).map(|e| e.color), Some(blue));
        assert_eq!(history.get_newest_first(3), None);
        assert_eq!(history.correct_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push(HexColor::from_rgb(1, 2, 3), false);
        assert_eq!(history.len(), 1);

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.newest_first().count(), 0);
    }
}

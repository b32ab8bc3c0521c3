use std::collections::VecDeque;
use std::fmt;

pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum HistoryError {
    InvalidCapacity(i64),
    Allocation(usize),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::InvalidCapacity(n) => {
                write!(f, "history capacity must be positive, got {}", n)
            }
            HistoryError::Allocation(n) => {
                write!(f, "allocation error when setting history capacity to {}", n)
            }
        }
    }
}

impl std::error::Error for HistoryError {}

/// Bounded queue of command lines. Entries are numbered from 1 (most recent)
/// to `len()` (oldest); numbers are derived, never stored.
///
/// Storage follows the number of entries held, so a large capacity costs
/// nothing until it is filled.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<Box<str>>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a line unless it repeats the newest entry. Returns whether the
    /// line was stored.
    pub fn add(&mut self, entry: &str) -> bool {
        if entry.trim().is_empty() || self.get(1) == Some(entry) {
            return false;
        }

        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                log::debug!("history evict: {}", evicted);
            }
        }
        self.entries.push_back(entry.into());

        log::debug!("history add: {}", entry);
        true
    }

    /// Looks up entry `number` (1 = newest). Out-of-range numbers yield `None`.
    pub fn get(&self, number: usize) -> Option<&str> {
        if number == 0 {
            return None;
        }
        let idx = self.entries.len().checked_sub(number)?;
        self.entries.get(idx).map(|line| &**line)
    }

    /// Iterates `(number, line)` pairs newest first.
    pub fn iter_recent(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .rev()
            .enumerate()
            .map(|(i, line)| (i + 1, &**line))
    }

    /// Moves to a fresh store holding the newest `min(capacity, len)` entries
    /// in chronological order. On any error the history is left unchanged.
    pub fn set_capacity(&mut self, capacity: i64) -> Result<(), HistoryError> {
        let new_capacity = usize::try_from(capacity)
            .ok()
            .filter(|&c| c > 0)
            .ok_or(HistoryError::InvalidCapacity(capacity))?;

        let kept = self.len().min(new_capacity);
        let mut entries = VecDeque::new();
        entries
            .try_reserve_exact(kept)
            .map_err(|_| HistoryError::Allocation(new_capacity))?;
        entries.extend(self.entries.iter().skip(self.len() - kept).cloned());

        log::debug!(
            "history resize: {} -> {} (keeping {})",
            self.capacity,
            new_capacity,
            kept
        );
        self.entries = entries;
        self.capacity = new_capacity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(history: &History) -> Vec<String> {
        history.iter_recent().map(|(_, l)| l.to_string()).collect()
    }

    #[test]
    fn test_default_capacity() {
        let history = History::default();
        assert_eq!(history.capacity(), DEFAULT_CAPACITY);
        assert!(history.is_empty());
    }

    #[test]
    fn test_numbering_is_newest_first() {
        let mut history = History::new(5);
        history.add("one");
        history.add("two");
        history.add("three");

        assert_eq!(history.get(1), Some("three"));
        assert_eq!(history.get(3), Some("one"));
        assert_eq!(history.get(0), None);
        assert_eq!(history.get(4), None);
        let numbers: Vec<usize> = history.iter_recent().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_consecutive_duplicates_collapse() {
        let mut history = History::new(5);
        assert!(history.add("ls -l"));
        assert!(!history.add("ls -l"));
        assert!(history.add("pwd"));
        assert!(history.add("ls -l"));
        assert_eq!(lines(&history), vec!["ls -l", "pwd", "ls -l"]);
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut history = History::new(3);
        for cmd in ["a", "b", "c", "d", "e"] {
            history.add(cmd);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(lines(&history), vec!["e", "d", "c"]);
    }

    #[test]
    fn test_shrink_keeps_most_recent() -> Result<(), HistoryError> {
        let mut history = History::new(5);
        for cmd in ["a", "b", "c", "d", "e", "f", "g"] {
            history.add(cmd);
        }
        history.set_capacity(2)?;
        assert_eq!(history.capacity(), 2);
        assert_eq!(lines(&history), vec!["g", "f"]);

        // order survives further inserts after the resize
        history.add("h");
        assert_eq!(lines(&history), vec!["h", "g"]);
        Ok(())
    }

    #[test]
    fn test_grow_keeps_everything() -> Result<(), HistoryError> {
        let mut history = History::new(2);
        for cmd in ["a", "b", "c"] {
            history.add(cmd);
        }
        history.set_capacity(4)?;
        history.add("d");
        history.add("e");
        assert_eq!(lines(&history), vec!["e", "d", "c", "b"]);
        Ok(())
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        let mut history = History::new(3);
        history.add("keep");
        assert_eq!(
            history.set_capacity(0),
            Err(HistoryError::InvalidCapacity(0))
        );
        assert_eq!(
            history.set_capacity(-4),
            Err(HistoryError::InvalidCapacity(-4))
        );
        assert_eq!(history.capacity(), 3);
        assert_eq!(lines(&history), vec!["keep"]);
    }

    #[test]
    fn test_huge_capacity_costs_nothing_up_front() -> Result<(), HistoryError> {
        let mut history = History::new(3);
        history.add("a");
        history.add("b");
        history.set_capacity(100_000_000_000)?;
        assert_eq!(history.capacity(), 100_000_000_000);
        assert_eq!(lines(&history), vec!["b", "a"]);

        history.add("c");
        assert_eq!(lines(&history), vec!["c", "b", "a"]);
        Ok(())
    }

    #[test]
    fn test_allocation_error_display() {
        let err = HistoryError::Allocation(7);
        assert!(err.to_string().starts_with("allocation error"));
    }

    #[test]
    fn test_blank_lines_ignored() {
        let mut history = History::new(3);
        assert!(!history.add("   "));
        assert!(history.is_empty());
    }
}

//! WatchSet - bookkeeping for markable elements
//!
//! Each entry is either watching (the visibility watcher reports on it) or
//! retired (a fire-once element that has been revealed and must never be
//! watched again). Every entry carries a generation that a hide or a manual
//! reset advances; a delayed reveal captured against an older generation is
//! stale and gets dropped.
//!
//! Generic over the item so the rules can be tested without a browser.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Watching,
    Retired,
}

#[derive(Debug)]
struct Entry<T> {
    item: T,
    status: Status,
    generation: u64,
}

#[derive(Debug)]
pub struct WatchSet<T> {
    entries: Vec<Entry<T>>,
}

impl<T: PartialEq> WatchSet<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    fn entry(&self, item: &T) -> Option<&Entry<T>> {
        self.entries.iter().find(|e| e.item == *item)
    }

    fn entry_mut(&mut self, item: &T) -> Option<&mut Entry<T>> {
        self.entries.iter_mut().find(|e| e.item == *item)
    }

    /// Start watching. Returns false when the item is already watched or retired.
    pub fn watch(&mut self, item: T) -> bool {
        if self.entry(&item).is_some() {
            return false;
        }
        self.entries.push(Entry {
            item,
            status: Status::Watching,
            generation: 0,
        });
        true
    }

    pub fn is_watching(&self, item: &T) -> bool {
        self.entry(item).is_some_and(|e| e.status == Status::Watching)
    }

    pub fn is_retired(&self, item: &T) -> bool {
        self.entry(item).is_some_and(|e| e.status == Status::Retired)
    }

    /// Stop watching for good. Returns true if the item was being watched.
    pub fn retire(&mut self, item: &T) -> bool {
        match self.entry_mut(item) {
            Some(entry) if entry.status == Status::Watching => {
                entry.status = Status::Retired;
                true
            }
            _ => false,
        }
    }

    /// Drop all bookkeeping for an item. Returns true if it was watched.
    pub fn forget(&mut self, item: &T) -> bool {
        let Some(idx) = self.entries.iter().position(|e| e.item == *item) else {
            return false;
        };
        self.entries.swap_remove(idx).status == Status::Watching
    }

    /// Generation to capture when scheduling a delayed reveal.
    /// `None` for items this set does not know about.
    pub fn generation(&self, item: &T) -> Option<u64> {
        self.entry(item).map(|e| e.generation)
    }

    /// Invalidate every reveal scheduled so far for this item.
    pub fn invalidate(&mut self, item: &T) -> Option<u64> {
        let entry = self.entry_mut(item)?;
        entry.generation += 1;
        Some(entry.generation)
    }

    /// Whether a reveal captured at `captured` should still apply.
    pub fn is_current(&self, item: &T, captured: Option<u64>) -> bool {
        match (captured, self.entry(item)) {
            (Some(captured), Some(entry)) => entry.generation == captured,
            _ => true,
        }
    }

    pub fn watching(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == Status::Watching)
            .count()
    }
}

impl<T: PartialEq> Default for WatchSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Generic filter/sort pipeline for list-shaped entities.
//!
//! One implementation reused across appointments, chat messages,
//! notifications and log events, parameterized by the accessor traits
//! ([`Timestamped`], [`Prioritized`], [`Searchable`], [`Flagged`]).
//! Predicates compose with logical AND by chaining; sorts are stable; the
//! input collection is never mutated.

mod accessors;

pub use accessors::*;

use chrono::{DateTime, FixedOffset, NaiveDate};

/// A borrowing filter/sort pipeline over a slice of entities.
///
/// Filtering and sorting operate on references into the input slice; call
/// [`Pipeline::collect`] for the references or [`Pipeline::cloned`] for an
/// owned copy. An empty or absent input yields an empty result.
pub struct Pipeline<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T> Pipeline<'a, T> {
    /// Start a pipeline over a slice.
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items: items.iter().collect(),
        }
    }

    /// Start a pipeline over a collection that may be absent.
    pub fn from_option(items: Option<&'a [T]>) -> Self {
        match items {
            Some(items) => Self::new(items),
            None => Self { items: Vec::new() },
        }
    }

    /// Keep only items matching the predicate. Chained calls AND together.
    pub fn retain(mut self, predicate: impl Fn(&T) -> bool) -> Self {
        self.items.retain(|item| predicate(item));
        self
    }

    /// Number of items currently retained.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether every item has been filtered out (or none were given).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finish, returning references in pipeline order.
    pub fn collect(self) -> Vec<&'a T> {
        self.items
    }
}

impl<'a, T: Clone> Pipeline<'a, T> {
    /// Finish, returning owned clones in pipeline order.
    pub fn cloned(self) -> Vec<T> {
        self.items.into_iter().cloned().collect()
    }
}

impl<'a, T: Timestamped> Pipeline<'a, T> {
    /// Keep items whose calendar day (in `offset`) equals `date`.
    /// Items with malformed timestamps are dropped.
    pub fn on_day(self, date: NaiveDate, offset: FixedOffset) -> Self {
        self.retain(move |item| {
            item.timestamp()
                .map(|t| t.with_timezone(&offset).date_naive() == date)
                .unwrap_or(false)
        })
    }

    /// Keep items at or after `cutoff`.
    pub fn since(self, cutoff: DateTime<FixedOffset>) -> Self {
        self.retain(move |item| matches!(item.timestamp(), Some(t) if t >= cutoff))
    }

    /// Keep items within `[start, end]` (inclusive at both ends).
    pub fn between(self, start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        self.retain(move |item| matches!(item.timestamp(), Some(t) if t >= start && t <= end))
    }

    /// Sort ascending by timestamp. Stable; items with malformed
    /// timestamps sort first.
    pub fn chronological(mut self) -> Self {
        self.items.sort_by_key(|item| item.timestamp());
        self
    }

    /// Sort descending by timestamp. Stable; items with malformed
    /// timestamps sort last.
    pub fn newest_first(mut self) -> Self {
        self.items
            .sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        self
    }
}

impl<'a, T: Prioritized> Pipeline<'a, T> {
    /// Sort descending by priority rank. Stable, so ties keep input order;
    /// unrecognized priorities (rank 0) sort last.
    pub fn by_priority(mut self) -> Self {
        self.items
            .sort_by(|a, b| b.priority_rank().cmp(&a.priority_rank()));
        self
    }
}

impl<'a, T: Searchable> Pipeline<'a, T> {
    /// Keep items where any searchable field contains `term`,
    /// case-insensitively. An empty term matches everything.
    pub fn search(self, term: &str) -> Self {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return self;
        }
        self.retain(move |item| {
            let mut hit = false;
            item.for_each_field(&mut |field| {
                if !hit && field.to_lowercase().contains(&needle) {
                    hit = true;
                }
            });
            hit
        })
    }
}

impl<'a, T: Flagged> Pipeline<'a, T> {
    /// Keep starred items only.
    pub fn starred_only(self) -> Self {
        self.retain(|item| item.is_starred())
    }

    /// Keep unread items only.
    pub fn unread_only(self) -> Self {
        self.retain(|item| !item.is_read())
    }
}

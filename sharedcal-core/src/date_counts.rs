//! Per-day record counts, used to mark grid cells that have events.

use std::collections::BTreeMap;

use crate::grid::CalendarCell;

/// A record stamped with a date string.
pub trait Dated {
    fn date(&self) -> &str;
}

impl<T: Dated + ?Sized> Dated for &T {
    fn date(&self) -> &str {
        (**self).date()
    }
}

/// Number of records per date key. Absent keys count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateCountMap {
    counts: BTreeMap<String, usize>,
}

impl DateCountMap {
    pub fn count(&self, date: &str) -> usize {
        self.counts.get(date).copied().unwrap_or(0)
    }

    /// Whether a grid cell should be decorated. Padding cells never are.
    pub fn has_events(&self, cell: &CalendarCell) -> bool {
        cell.iso_date.as_deref().is_some_and(|iso| self.count(iso) > 0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(date, n)| (date.as_str(), *n))
    }
}

/// Count records per date in a single pass.
///
/// Dates are opaque keys: a value that is not canonical `YYYY-MM-DD` is
/// counted under its own key and will simply never match a grid cell.
/// Records with an empty date are skipped.
pub fn aggregate<R: Dated>(records: impl IntoIterator<Item = R>) -> DateCountMap {
    let mut counts = BTreeMap::new();

    for record in records {
        let date = record.date();
        if date.is_empty() {
            continue;
        }
        *counts.entry(date.to_string()).or_insert(0) += 1;
    }

    DateCountMap { counts }
}

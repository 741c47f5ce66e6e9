//! Core of the sharedcal schedule app.
//!
//! - `grid` builds Sunday-first month grids padded to whole weeks
//! - `date_counts` counts records per date so grid cells can be marked
//! - `store` persists users, events, todos and diary entries as JSON blobs
//! - `board` holds the derived views and edits the front end needs

pub mod board;
pub mod clock;
pub mod config;
pub mod date_counts;
pub mod error;
pub mod grid;
pub mod iso_date;
pub mod month_cursor;
pub mod records;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_counts::{DateCountMap, Dated, aggregate};
pub use error::{SharedCalError, SharedCalResult};
pub use grid::{CalendarCell, build};
pub use month_cursor::MonthCursor;

//! Records kept in the shared store.
//!
//! Field names serialize in camelCase so the stored JSON blobs keep the
//! layout the web client wrote.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;
use crate::date_counts::Dated;
use crate::error::{SharedCalError, SharedCalResult};
use crate::iso_date::to_iso_date;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Trim `value`, rejecting it if nothing is left.
fn required(field: &str, value: &str) -> SharedCalResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SharedCalError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional value, mapping blank to `None`.
fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: &str, email: &str) -> SharedCalResult<Self> {
        Ok(User {
            id: new_id(),
            name: required("name", name)?,
            email: required("email", email)?,
        })
    }
}

/// A point picked for an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lon: Option<f64>,
}

impl CalendarEvent {
    pub fn new(
        date: NaiveDate,
        title: &str,
        description: &str,
        created_by: &str,
        place: Option<Place>,
    ) -> SharedCalResult<Self> {
        let place = place.and_then(|p| {
            optional(Some(&p.name)).map(|name| Place { name, ..p })
        });

        Ok(CalendarEvent {
            id: new_id(),
            date: to_iso_date(date),
            title: required("title", title)?,
            description: description.trim().to_string(),
            created_by: required("author", created_by)?,
            location_lat: place.as_ref().and_then(|p| p.lat),
            location_lon: place.as_ref().and_then(|p| p.lon),
            location_name: place.map(|p| p.name),
        })
    }
}

impl Dated for CalendarEvent {
    fn date(&self) -> &str {
        &self.date
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    pub created_by: String,
}

impl TodoItem {
    pub fn new(text: &str, created_by: &str) -> SharedCalResult<Self> {
        Ok(TodoItem {
            id: new_id(),
            text: required("todo text", text)?,
            completed: false,
            created_by: required("author", created_by)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl DiaryEntry {
    pub fn new(
        date: NaiveDate,
        content: &str,
        created_by: &str,
        clock: &impl Clock,
    ) -> SharedCalResult<Self> {
        Ok(DiaryEntry {
            id: new_id(),
            date: to_iso_date(date),
            content: required("diary content", content)?,
            created_by: required("author", created_by)?,
            created_at: clock.now(),
        })
    }
}

impl Dated for DiaryEntry {
    fn date(&self) -> &str {
        &self.date
    }
}

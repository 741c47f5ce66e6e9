//! Views and edits over the shared collections.

use crate::error::{SharedCalError, SharedCalResult};
use crate::records::{CalendarEvent, DiaryEntry, TodoItem, User};

/// Records addressable by id.
pub trait Identified {
    const KIND: &'static str;

    fn id(&self) -> &str;
}

macro_rules! identified {
    ($ty:ty, $kind:literal) => {
        impl Identified for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

identified!(User, "User");
identified!(CalendarEvent, "Event");
identified!(TodoItem, "Todo");
identified!(DiaryEntry, "Diary entry");

/// Remove the record with `id`, returning it.
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> SharedCalResult<T> {
    let index = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| SharedCalError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        })?;
    Ok(items.remove(index))
}

/// Add a user unless the email is taken.
pub fn register_user(users: &mut Vec<User>, user: User) -> SharedCalResult<&User> {
    if users.iter().any(|u| u.email == user.email) {
        return Err(SharedCalError::DuplicateEmail(user.email));
    }
    users.push(user);
    Ok(&users[users.len() - 1])
}

/// Give a user, found by id or email, a new display name.
///
/// Records already created under the old name keep it in `createdBy`.
pub fn rename_user<'a>(
    users: &'a mut [User],
    id_or_email: &str,
    new_name: &str,
) -> SharedCalResult<&'a User> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(SharedCalError::Validation("name must not be empty".into()));
    }

    let needle = id_or_email.trim();
    let user = users
        .iter_mut()
        .find(|u| u.id == needle || u.email == needle)
        .ok_or_else(|| SharedCalError::NotFound {
            kind: User::KIND,
            id: needle.to_string(),
        })?;
    user.name = new_name.to_string();
    Ok(user)
}

/// Look a user up by name or email.
pub fn find_user<'a>(users: &'a [User], name_or_email: &str) -> Option<&'a User> {
    let needle = name_or_email.trim();
    users
        .iter()
        .find(|u| u.name == needle || u.email == needle)
}

/// Events on one day, in stored order.
pub fn events_on<'a>(events: &'a [CalendarEvent], iso_date: &str) -> Vec<&'a CalendarEvent> {
    events.iter().filter(|e| e.date == iso_date).collect()
}

/// Open todos first, otherwise in stored order.
pub fn sorted_todos(todos: &[TodoItem]) -> Vec<&TodoItem> {
    let mut sorted: Vec<_> = todos.iter().collect();
    sorted.sort_by_key(|t| t.completed);
    sorted
}

/// Flip a todo's completed flag, returning the new value.
pub fn toggle_todo(todos: &mut [TodoItem], id: &str) -> SharedCalResult<bool> {
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| SharedCalError::NotFound {
            kind: TodoItem::KIND,
            id: id.to_string(),
        })?;
    todo.completed = !todo.completed;
    Ok(todo.completed)
}

/// A user's diary, newest day first, later entries first within a day.
pub fn diaries_for<'a>(diaries: &'a [DiaryEntry], user_name: &str) -> Vec<&'a DiaryEntry> {
    let mut entries: Vec<_> = diaries
        .iter()
        .filter(|d| d.created_by == user_name)
        .collect();
    entries.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    entries
}

/// How much a user has contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserTotals {
    pub events: usize,
    pub todos: usize,
    pub diaries: usize,
}

impl UserTotals {
    pub fn for_user(
        user_name: &str,
        events: &[CalendarEvent],
        todos: &[TodoItem],
        diaries: &[DiaryEntry],
    ) -> Self {
        UserTotals {
            events: events.iter().filter(|e| e.created_by == user_name).count(),
            todos: todos.iter().filter(|t| t.created_by == user_name).count(),
            diaries: diaries.iter().filter(|d| d.created_by == user_name).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};
    use chrono::{Duration, NaiveDate};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(date: NaiveDate, title: &str, by: &str) -> CalendarEvent {
        CalendarEvent::new(date, title, "", by, None).unwrap()
    }

    #[test]
    fn test_register_user_rejects_duplicate_email() {
        let mut users = Vec::new();
        register_user(&mut users, User::new("alice", "a@example.com").unwrap()).unwrap();

        let err = register_user(&mut users, User::new("alicia", "a@example.com").unwrap())
            .unwrap_err();
        assert!(matches!(err, SharedCalError::DuplicateEmail(ref e) if e == "a@example.com"));
        assert_eq!(users.len(), 1);

        assert_eq!(find_user(&users, "alice").unwrap().email, "a@example.com");
        assert_eq!(find_user(&users, " a@example.com ").unwrap().name, "alice");
        assert!(find_user(&users, "bob").is_none());
    }

    #[test]
    fn test_events_on_filters_by_exact_date() {
        let events = vec![
            event(day(2024, 1, 5), "a", "alice"),
            event(day(2024, 1, 6), "b", "alice"),
            event(day(2024, 1, 5), "c", "bob"),
        ];

        let titles: Vec<_> = events_on(&events, "2024-01-05")
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert!(events_on(&events, "2024-1-5").is_empty());
    }

    #[test]
    fn test_sorted_todos_puts_open_items_first() {
        let mut todos = vec![
            TodoItem::new("one", "alice").unwrap(),
            TodoItem::new("two", "alice").unwrap(),
            TodoItem::new("three", "alice").unwrap(),
        ];
        let first = todos[0].id.clone();
        assert!(toggle_todo(&mut todos, &first).unwrap());

        let texts: Vec<_> = sorted_todos(&todos).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "three", "one"]);

        assert!(!toggle_todo(&mut todos, &first).unwrap());
        assert!(toggle_todo(&mut todos, "missing").is_err());
    }

    #[test]
    fn test_diaries_for_sorts_newest_first() {
        let clock = FixedClock::on(day(2024, 3, 10));
        let later = FixedClock::new(clock.now() + Duration::hours(1));

        let diaries = vec![
            DiaryEntry::new(day(2024, 3, 1), "old", "alice", &clock).unwrap(),
            DiaryEntry::new(day(2024, 3, 9), "first", "alice", &clock).unwrap(),
            DiaryEntry::new(day(2024, 3, 9), "second", "alice", &later).unwrap(),
            DiaryEntry::new(day(2024, 3, 9), "other", "bob", &later).unwrap(),
        ];

        let contents: Vec<_> = diaries_for(&diaries, "alice")
            .iter()
            .map(|d| d.content.as_str())
            .collect();
        assert_eq!(contents, vec!["second", "first", "old"]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut events = vec![event(day(2024, 1, 5), "a", "alice")];
        let id = events[0].id.clone();

        let err = remove_by_id(&mut events, "nope").unwrap_err();
        assert_eq!(err.to_string(), "Event not found: nope");

        assert_eq!(remove_by_id(&mut events, &id).unwrap().title, "a");
        assert!(events.is_empty());
    }

    #[test]
    fn test_user_totals() {
        let events = vec![
            event(day(2024, 1, 5), "a", "alice"),
            event(day(2024, 1, 6), "b", "bob"),
        ];
        let todos = vec![
            TodoItem::new("x", "alice").unwrap(),
            TodoItem::new("y", "alice").unwrap(),
        ];
        let clock = FixedClock::on(day(2024, 1, 7));
        let diaries = vec![
            DiaryEntry::new(day(2024, 1, 6), "quiet", "alice", &clock).unwrap(),
            DiaryEntry::new(day(2024, 1, 7), "busy", "bob", &clock).unwrap(),
        ];

        assert_eq!(
            UserTotals::for_user("alice", &events, &todos, &diaries),
            UserTotals {
                events: 1,
                todos: 2,
                diaries: 1
            }
        );
        assert_eq!(
            UserTotals::for_user("carol", &events, &todos, &diaries),
            UserTotals::default()
        );
    }

    #[test]
    fn test_rename_user_trims_and_keeps_old_records() {
        let mut users = Vec::new();
        register_user(&mut users, User::new("alice", "a@example.com").unwrap()).unwrap();
        let id = users[0].id.clone();
        let events = vec![event(day(2024, 1, 5), "a", "alice")];

        assert_eq!(rename_user(&mut users, &id, "  Alicia ").unwrap().name, "Alicia");
        assert_eq!(rename_user(&mut users, "a@example.com", "Ali").unwrap().name, "Ali");
        assert_eq!(find_user(&users, "Ali").unwrap().id, id);

        assert_eq!(events[0].created_by, "alice");
        assert_eq!(UserTotals::for_user("Ali", &events, &[], &[]).events, 0);
    }

    #[test]
    fn test_rename_user_rejects_blank_name_and_unknown_user() {
        let mut users = vec![User::new("alice", "a@example.com").unwrap()];

        let err = rename_user(&mut users, "a@example.com", "   ").unwrap_err();
        assert!(matches!(err, SharedCalError::Validation(_)));
        assert_eq!(users[0].name, "alice");

        let err = rename_user(&mut users, "nobody@example.com", "Bob").unwrap_err();
        assert_eq!(err.to_string(), "User not found: nobody@example.com");
    }
}

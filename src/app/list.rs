//! The record pool and its sort/view state.
//!
//! All mutations go through named methods so the event loop, the renderer
//! and tests observe the same invariants: a replaced list always starts
//! unsorted, and sorting never re-fetches.

use std::cmp::Ordering;

use crate::source::UserRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to the active column header.
    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Active sort column (as a dotted path) and direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Config that results from activating `key` while `self` is active.
    pub fn toggled(&self, key: &str) -> Self {
        let direction = match self.key.as_deref() {
            Some(active) if active == key => self.direction.flipped(),
            _ => SortDirection::Ascending,
        };
        Self { key: Some(key.to_string()), direction }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }
}

/// Whether the table shows a page of the dataset or search results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Paged,
    SearchResult,
}

impl ViewMode {
    pub fn shows_pagination(self) -> bool {
        matches!(self, ViewMode::Paged)
    }

    pub fn shows_empty_message(self) -> bool {
        matches!(self, ViewMode::SearchResult)
    }
}

#[derive(Clone, Debug, Default)]
pub struct UserListState {
    rows: Vec<UserRecord>,
    sort: SortConfig,
    view_mode: ViewMode,
}

impl UserListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pool wholesale. Sorting starts over.
    pub fn replace_list(&mut self, records: Vec<UserRecord>) {
        self.rows = records;
        self.sort = SortConfig::default();
    }

    /// Toggle the sort on `key` and reorder the current rows in place.
    pub fn apply_sort(&mut self, key: &str) {
        let next = self.sort.toggled(key);
        let descending = next.direction == SortDirection::Descending;
        self.rows.sort_by(|a, b| {
            let ord = compare_by_path(a, b, key);
            if descending { ord.reverse() } else { ord }
        });
        self.sort = next;
    }

    pub fn current_rows(&self) -> &[UserRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sort_config(&self) -> &SortConfig {
        &self.sort
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// The empty-state row is shown only for an empty search result.
    pub fn shows_no_match(&self) -> bool {
        self.view_mode.shows_empty_message() && self.rows.is_empty()
    }
}

// ISO-8601 timestamps order chronologically under plain string comparison.
fn compare_by_path(a: &UserRecord, b: &UserRecord, path: &str) -> Ordering {
    a.field(path).cmp(&b.field(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Gender, Login, Name, Registered};

    fn mk(username: &str, first: &str, date: &str) -> UserRecord {
        UserRecord {
            login: Login { username: username.into() },
            name: Name { title: None, first: first.into(), last: "Doe".into() },
            email: format!("{username}@example.com"),
            gender: Gender::Female,
            registered: Registered { date: date.into(), age: None },
        }
    }

    fn firsts(s: &UserListState) -> Vec<&str> {
        s.current_rows().iter().map(|u| u.name.first.as_str()).collect()
    }

    #[test]
    fn toggle_flips_same_key_and_resets_on_new_key() {
        let cfg = SortConfig::default();
        let a = cfg.toggled("email");
        assert_eq!(a.direction, SortDirection::Ascending);
        let b = a.toggled("email");
        assert_eq!(b.direction, SortDirection::Descending);
        let c = b.toggled("email");
        assert_eq!(c.direction, SortDirection::Ascending);
        let d = b.toggled("gender");
        assert_eq!(d, SortConfig { key: Some("gender".into()), direction: SortDirection::Ascending });
    }

    #[test]
    fn sorts_by_dotted_path_in_both_directions() {
        let mut s = UserListState::new();
        s.replace_list(vec![
            mk("u1", "carol", "2010-01-01T00:00:00Z"),
            mk("u2", "alice", "2015-01-01T00:00:00Z"),
            mk("u3", "bob", "2003-01-01T00:00:00Z"),
        ]);
        s.apply_sort("name.first");
        assert_eq!(firsts(&s), ["alice", "bob", "carol"]);
        s.apply_sort("name.first");
        assert_eq!(firsts(&s), ["carol", "bob", "alice"]);

        s.apply_sort("registered.date");
        assert_eq!(firsts(&s), ["bob", "carol", "alice"]);
        assert_eq!(s.sort_config().direction, SortDirection::Ascending);
    }

    #[test]
    fn replace_list_clears_sort_but_keeps_view_mode() {
        let mut s = UserListState::new();
        s.replace_list(vec![mk("u1", "b", "x"), mk("u2", "a", "y")]);
        s.set_view_mode(ViewMode::SearchResult);
        s.apply_sort("login.username");
        assert!(s.sort_config().is_active("login.username"));

        s.replace_list(vec![]);
        assert_eq!(s.sort_config(), &SortConfig::default());
        assert_eq!(s.view_mode(), ViewMode::SearchResult);
        assert!(s.shows_no_match());
    }

    #[test]
    fn empty_paged_list_does_not_show_no_match() {
        let s = UserListState::new();
        assert!(s.is_empty());
        assert!(!s.shows_no_match());
    }
}

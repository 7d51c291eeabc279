use crate::source::UserRecord;

/// Lower-case a raw search input the way it is compared.
pub fn normalize_term(raw: &str) -> String {
    raw.to_lowercase()
}

/// Exact, case-insensitive match on first or last name. `term` must already
/// be normalized; substrings never match.
pub fn matches_name(user: &UserRecord, term: &str) -> bool {
    user.name.first.to_lowercase() == term || user.name.last.to_lowercase() == term
}

/// Keep the records of `pool` whose first or last name equals `term`.
pub fn filter_by_name(pool: Vec<UserRecord>, term: &str) -> Vec<UserRecord> {
    pool.into_iter().filter(|u| matches_name(u, term)).collect()
}

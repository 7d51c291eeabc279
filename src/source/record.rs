//! User records as delivered by the random-user API.
//!
//! Only the fields the dashboard reads are modelled; everything else in the
//! upstream payload is ignored during deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as reported (and filtered) by the upstream API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub title: Option<String>,
    pub first: String,
    pub last: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registered {
    /// ISO-8601 timestamp, e.g. `2007-07-09T05:51:59.390Z`.
    pub date: String,
    #[serde(default)]
    pub age: Option<u32>,
}

/// One synthetic user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub login: Login,
    pub name: Name,
    pub email: String,
    pub gender: Gender,
    pub registered: Registered,
}

impl UserRecord {
    /// Resolve a dotted path such as `"name.first"` to the field's string value.
    ///
    /// Returns `None` for paths that do not name a known string field.
    pub fn field(&self, path: &str) -> Option<&str> {
        match path {
            "login.username" => Some(&self.login.username),
            "name.first" => Some(&self.name.first),
            "name.last" => Some(&self.name.last),
            "name.title" => self.name.title.as_deref(),
            "email" => Some(&self.email),
            "gender" => Some(self.gender.as_str()),
            "registered.date" => Some(&self.registered.date),
            _ => None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

/// Envelope of every random-user API response.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub results: Vec<UserRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [{
            "gender": "female",
            "name": {"title": "Ms", "first": "Alice", "last": "Moreau"},
            "location": {"city": "Lyon"},
            "email": "alice.moreau@example.com",
            "login": {"uuid": "x", "username": "bluecat42"},
            "registered": {"date": "2007-07-09T05:51:59.390Z", "age": 16}
        }],
        "info": {"seed": "abc", "results": 1, "page": 1, "version": "1.4"}
    }"#;

    #[test]
    fn deserializes_upstream_payload_and_ignores_extra_fields() {
        let resp: UsersResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(resp.results.len(), 1);
        let u = &resp.results[0];
        assert_eq!(u.login.username, "bluecat42");
        assert_eq!(u.gender, Gender::Female);
        assert_eq!(u.registered.age, Some(16));
        assert_eq!(u.full_name(), "Alice Moreau");
    }

    #[test]
    fn missing_required_field_fails_the_whole_batch() {
        let body = r#"{"results":[{"gender":"male","name":{"first":"a","last":"b"},
            "login":{"username":"u"},"registered":{"date":"2000-01-01T00:00:00Z"}}]}"#;
        assert!(serde_json::from_str::<UsersResponse>(body).is_err());
    }

    #[test]
    fn dotted_paths_resolve_known_fields_only() {
        let resp: UsersResponse = serde_json::from_str(SAMPLE).unwrap();
        let u = &resp.results[0];
        assert_eq!(u.field("login.username"), Some("bluecat42"));
        assert_eq!(u.field("name.last"), Some("Moreau"));
        assert_eq!(u.field("gender"), Some("female"));
        assert_eq!(u.field("registered.date"), Some("2007-07-09T05:51:59.390Z"));
        assert_eq!(u.field("location.city"), None);
        assert_eq!(u.field(""), None);
    }
}

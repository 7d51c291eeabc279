// Unit tests for user-dashboard
// These tests work with the public API only; no network, no terminal.

#[cfg(test)]
mod fixtures {
    use user_dashboard::source::{Gender, Login, Name, Registered, UserRecord};

    pub fn user(username: &str, first: &str, last: &str, gender: Gender, date: &str) -> UserRecord {
        UserRecord {
            login: Login { username: username.to_string() },
            name: Name { title: Some("Mx".to_string()), first: first.to_string(), last: last.to_string() },
            email: format!("{first}.{last}@example.com").to_lowercase(),
            gender,
            registered: Registered { date: date.to_string(), age: None },
        }
    }

    pub fn sample() -> Vec<UserRecord> {
        vec![
            user("zed99", "Zoe", "Adams", Gender::Female, "2016-02-01T08:00:00.000Z"),
            user("amber12", "Liam", "Brown", Gender::Male, "2004-11-20T17:45:00.000Z"),
            user("kite7", "alice", "Carter", Gender::Female, "2011-05-05T05:05:05.000Z"),
            user("moss3", "Noah", "Alice", Gender::Male, "2021-09-30T23:59:00.000Z"),
            user("pine4", "Malice", "Dunn", Gender::Female, "2009-01-01T00:00:00.000Z"),
        ]
    }
}

#[cfg(test)]
mod sort_tests {
    use super::fixtures::sample;
    use user_dashboard::app::Column;
    use user_dashboard::app::list::{SortDirection, UserListState};

    #[test]
    fn test_sort_twice_is_ascending_then_descending() {
        for column in Column::ALL {
            let key = column.path();
            let mut state = UserListState::new();
            state.replace_list(sample());

            state.apply_sort(key);
            assert_eq!(state.sort_config().direction, SortDirection::Ascending, "{key}");
            let asc: Vec<_> = state.current_rows().iter().map(|u| u.field(key).unwrap().to_string()).collect();
            assert!(asc.windows(2).all(|w| w[0] <= w[1]), "{key} not ascending: {asc:?}");

            state.apply_sort(key);
            assert_eq!(state.sort_config().direction, SortDirection::Descending, "{key}");
            let desc: Vec<_> = state.current_rows().iter().map(|u| u.field(key).unwrap().to_string()).collect();
            assert!(desc.windows(2).all(|w| w[0] >= w[1]), "{key} not descending: {desc:?}");
        }
    }

    #[test]
    fn test_sort_by_first_name_is_lexicographic() {
        let mut state = UserListState::new();
        state.replace_list(sample());
        state.apply_sort("name.first");
        let firsts: Vec<_> = state.current_rows().iter().map(|u| u.name.first.as_str()).collect();
        // Byte order: upper case sorts before lower case.
        assert_eq!(firsts, ["Liam", "Malice", "Noah", "Zoe", "alice"]);
    }

    #[test]
    fn test_sort_by_registration_is_chronological() {
        let mut state = UserListState::new();
        state.replace_list(sample());
        state.apply_sort("registered.date");
        let users: Vec<_> = state.current_rows().iter().map(|u| u.login.username.as_str()).collect();
        assert_eq!(users, ["amber12", "pine4", "kite7", "zed99", "moss3"]);
    }

    #[test]
    fn test_switching_column_restarts_ascending() {
        let mut state = UserListState::new();
        state.replace_list(sample());
        state.apply_sort("email");
        state.apply_sort("email");
        state.apply_sort("gender");
        assert_eq!(state.sort_config().key.as_deref(), Some("gender"));
        assert_eq!(state.sort_config().direction, SortDirection::Ascending);
    }

    #[test]
    fn test_unknown_path_keeps_order() {
        let mut state = UserListState::new();
        state.replace_list(sample());
        state.apply_sort("location.city");
        let users: Vec<_> = state.current_rows().iter().map(|u| u.login.username.as_str()).collect();
        assert_eq!(users, ["zed99", "amber12", "kite7", "moss3", "pine4"]);
    }
}

#[cfg(test)]
mod search_tests {
    use super::fixtures::sample;
    use user_dashboard::search::{filter_by_name, normalize_term};

    #[test]
    fn test_search_is_exact_and_case_insensitive() {
        let found = filter_by_name(sample(), &normalize_term("Alice"));
        let users: Vec<_> = found.iter().map(|u| u.login.username.as_str()).collect();
        assert_eq!(users, ["kite7", "moss3"]);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(filter_by_name(sample(), &normalize_term("Nobody")).is_empty());
    }
}

#[cfg(test)]
mod orchestrator_tests {
    use super::fixtures::sample;
    use user_dashboard::app::list::{SortConfig, ViewMode};
    use user_dashboard::app::orchestrator::{Commit, FetchOutcome, GenderFilter, Query, QueryOrchestrator};
    use user_dashboard::source::Gender;

    fn answer(o: &mut QueryOrchestrator, req: user_dashboard::app::orchestrator::FetchRequest) -> Commit {
        let rows = match &req.query {
            Query::Gender(g) => sample().into_iter().filter(|u| u.gender == *g).collect(),
            _ => sample(),
        };
        o.apply(FetchOutcome { seq: req.seq, query: req.query, result: Ok(rows) })
    }

    #[test]
    fn test_reset_after_search_and_filter() {
        let mut o = QueryOrchestrator::new();
        let req = o.initial_load();
        answer(&mut o, req);
        o.set_search_term("alice");
        let req = o.submit_search();
        answer(&mut o, req);
        o.sort_by("email");
        let req = o.select_gender(GenderFilter::Male);
        answer(&mut o, req);
        o.sort_by("email");

        let req = o.reset();
        assert_eq!(req.query, Query::Page(1));
        assert_eq!(o.list().view_mode(), ViewMode::Paged);
        assert_eq!(answer(&mut o, req), Commit::Applied { rows: 5 });
        assert_eq!(o.list().sort_config(), &SortConfig::default());
    }

    #[test]
    fn test_empty_search_stays_in_search_mode() {
        let mut o = QueryOrchestrator::new();
        o.set_search_term("xyzzy");
        let req = o.submit_search();
        assert_eq!(answer(&mut o, req), Commit::Applied { rows: 0 });
        assert_eq!(o.list().view_mode(), ViewMode::SearchResult);
        assert!(o.list().current_rows().is_empty());
    }

    #[test]
    fn test_female_filter_yields_female_rows() {
        let mut o = QueryOrchestrator::new();
        let req = o.select_gender(GenderFilter::Female);
        assert_eq!(req.query, Query::Gender(Gender::Female));
        answer(&mut o, req);
        assert_eq!(o.list().len(), 3);
        assert!(o.list().current_rows().iter().all(|u| u.gender == Gender::Female));
    }

    #[test]
    fn test_out_of_order_responses_commit_latest_only() {
        let mut o = QueryOrchestrator::new();
        let search = {
            o.set_search_term("alice");
            o.submit_search()
        };
        let page = o.jump_to_page(1).unwrap();
        assert_eq!(answer(&mut o, page), Commit::Applied { rows: 5 });
        assert_eq!(answer(&mut o, search), Commit::Stale);
        assert_eq!(o.list().len(), 5);
        assert_eq!(o.list().view_mode(), ViewMode::Paged);
    }
}

#[cfg(test)]
mod format_tests {
    use chrono::Utc;
    use user_dashboard::ui::format::format_date_in;

    #[test]
    fn test_registration_date_format() {
        assert_eq!(format_date_in("2021-09-30T23:59:00.000Z", &Utc), "30-09-2021 23:59");
        assert_eq!(format_date_in("2004-01-02T03:04:05Z", &Utc), "02-01-2004 03:04");
    }
}

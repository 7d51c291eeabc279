//! Application state types and entry glue.
//!
//! The data core lives in [`list`] (record pool, sort, view mode) and
//! [`orchestrator`] (actions to requests). [`worker`] performs the requests,
//! and [`update`] runs the terminal event loop (re-exported as `run`).
//!
pub mod keymap;
pub mod list;
pub mod orchestrator;
pub mod theme;
pub mod update;
pub mod worker;

use keymap::Keymap;
use orchestrator::QueryOrchestrator;
pub use theme::Theme;

/// Table columns. Each header sorts by one dotted path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Username,
    Name,
    Email,
    Gender,
    Registered,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Username,
        Column::Name,
        Column::Email,
        Column::Gender,
        Column::Registered,
    ];

    /// Dotted path into a user record used as sort key.
    pub fn path(self) -> &'static str {
        match self {
            Column::Username => "login.username",
            Column::Name => "name.first",
            Column::Email => "email",
            Column::Gender => "gender",
            Column::Registered => "registered.date",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Column::Username => "Username",
            Column::Name => "Name",
            Column::Email => "Email",
            Column::Gender => "Gender",
            Column::Registered => "Registration Date",
        }
    }

    /// Name used in `keybinds.conf` after the `SortBy` prefix.
    pub fn action_name(self) -> &'static str {
        match self {
            Column::Username => "Username",
            Column::Name => "Name",
            Column::Email => "Email",
            Column::Gender => "Gender",
            Column::Registered => "Registered",
        }
    }

    pub fn default_key(self) -> char {
        match self {
            Column::Username => 'u',
            Column::Name => 'n',
            Column::Email => 'e',
            Column::Gender => 'g',
            Column::Registered => 'd',
        }
    }
}

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the search prompt.
    Search,
}

pub struct AppState {
    pub orchestrator: QueryOrchestrator,
    pub input_mode: InputMode,
    pub selected_index: usize,
    pub rows_per_page: usize,
    pub theme: Theme,
    pub keymap: Keymap,
    pub show_help: bool,
}

impl AppState {
    pub fn new(theme: Theme, keymap: Keymap) -> Self {
        Self {
            orchestrator: QueryOrchestrator::new(),
            input_mode: InputMode::Normal,
            selected_index: 0,
            rows_per_page: 10,
            theme,
            keymap,
            show_help: false,
        }
    }

    /// Keep the selection inside the current rows.
    pub fn clamp_selection(&mut self) {
        let len = self.orchestrator.list().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), Keymap::default())
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;

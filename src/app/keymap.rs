//! Keybinding configuration: parse `keybinds.conf`, provide defaults, and map keys to actions.
//!
//! The file format is one binding per line, `<Action> = <KeySpec>`, with `#`
//! comments. Bindings in the file are layered over the defaults, so a file
//! only needs the keys it changes.

use std::collections::HashMap;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use super::Column;

/// Semantic keyboard actions that can be bound to key combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Open the search prompt.
    StartSearch,
    /// Advance the gender control: All, Female, Male.
    CycleGender,
    /// Clear the search and gender filter and reload page 1.
    ResetFilters,
    /// Jump to a page of the pagination bar.
    JumpPage(u32),
    /// Activate a column header (sort, or flip direction).
    SortBy(Column),
    /// Move the selection up one row.
    MoveUp,
    /// Move the selection down one row.
    MoveDown,
    /// Move the selection up by one screen of rows.
    PageUp,
    /// Move the selection down by one screen of rows.
    PageDown,
    /// Show or hide the keybinding overlay.
    ToggleHelp,
    /// Swallow the key.
    Ignore,
}

/// Key-to-action table for normal mode.
///
/// Maps `(KeyModifiers, KeyCode)` pairs to [`KeyAction`]s. Several keys may
/// share an action (`j` and Down both move down). The search prompt bypasses
/// the keymap and reads raw keys.
#[derive(Clone, Debug)]
pub struct Keymap {
    /// Canonical mapping from (modifiers, code) to action.
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    /// Create a keymap with the default bindings.
    ///
    /// Includes:
    /// - q / Ctrl+c to quit, / to search, f for the gender filter, r to reset
    /// - 1..3 for the pagination bar
    /// - one letter per column header (u, n, e, g, d)
    /// - arrows, j/k and Page Up/Down to move the selection
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Char('q')), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::NONE, Esc), KeyAction::Ignore);
        bindings.insert((M::NONE, Char('/')), KeyAction::StartSearch);
        bindings.insert((M::NONE, Char('f')), KeyAction::CycleGender);
        bindings.insert((M::NONE, Char('r')), KeyAction::ResetFilters);
        bindings.insert((M::NONE, Char('?')), KeyAction::ToggleHelp);

        bindings.insert((M::NONE, Char('1')), KeyAction::JumpPage(1));
        bindings.insert((M::NONE, Char('2')), KeyAction::JumpPage(2));
        bindings.insert((M::NONE, Char('3')), KeyAction::JumpPage(3));

        for column in Column::ALL {
            bindings.insert((M::NONE, Char(column.default_key())), KeyAction::SortBy(column));
        }

        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        bindings.insert((M::NONE, Char('k')), KeyAction::MoveUp);
        bindings.insert((M::NONE, Char('j')), KeyAction::MoveDown);
        bindings.insert((M::NONE, PageUp), KeyAction::PageUp);
        bindings.insert((M::NONE, PageDown), KeyAction::PageDown);

        Self { bindings }
    }

    /// Load `path`, or write the defaults there if it does not exist yet.
    ///
    /// A file that exists but cannot be read yields the defaults. A failed
    /// write is logged and the defaults are still returned.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the keymap configuration file.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        let km = Self::default();
        if let Err(e) = km.write_file(path) {
            warn!(path = %path.display(), error = %e, "could not write default keybinds");
        }
        km
    }

    /// Load a keymap from a configuration file.
    ///
    /// Starts from the defaults and layers each `<Action> = <KeySpec>` line
    /// on top. Lines that do not parse are logged at debug level and skipped.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the keymap configuration file.
    ///
    /// # Returns
    ///
    /// `Some(keymap)` if the file is readable; `None` otherwise.
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut map = Self::default();
        for (lineno, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once('=') else {
                debug!(line = lineno + 1, "keybinds: missing '='");
                continue;
            };
            match (parse_action(lhs), parse_key(rhs)) {
                (Some(action), Some(key)) => {
                    map.bindings.insert(key, action);
                }
                _ => debug!(line = lineno + 1, "keybinds: unrecognized binding"),
            }
        }
        Some(map)
    }

    /// Write the current keymap to a configuration file.
    ///
    /// The output starts with a comment block listing the key syntax and
    /// every action name, followed by one sorted binding per line.
    ///
    /// # Arguments
    ///
    /// * `path` - The path where the keymap will be written.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or the I/O error from the write.
    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# user-dashboard keybindings\n");
        buf.push_str("# Format: <Action> = <KeySpec>\n");
        buf.push_str("# KeySpec examples: q, Ctrl+c, Enter, Esc, Up, Down, PageUp, PageDown, /, ?\n");
        buf.push_str("# Actions: Quit, StartSearch, CycleGender, ResetFilters, JumpPage1..JumpPage3,\n");
        buf.push_str("#   SortByUsername, SortByName, SortByEmail, SortByGender, SortByRegistered,\n");
        buf.push_str("#   MoveUp, MoveDown, PageUp, PageDown, ToggleHelp, Ignore\n\n");

        let mut entries: Vec<(String, String)> = self
            .bindings
            .iter()
            .map(|((mods, code), action)| (format_action(*action), Self::format_key(*mods, *code)))
            .collect();
        entries.sort();
        for (action, key) in entries {
            let _ = writeln!(&mut buf, "{action} = {key}");
        }

        std::fs::write(path, buf)
    }

    /// Action bound to the pressed key, if any. Modifiers must match exactly.
    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// Every binding as `((modifiers, code), action)`, in no particular order.
    pub fn all_bindings(&self) -> Vec<((KeyModifiers, KeyCode), KeyAction)> {
        self.bindings.iter().map(|(k, v)| (*k, *v)).collect()
    }

    /// Keys bound to `action`, formatted and sorted, e.g. `["Down", "j"]`.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|((m, c), _)| Self::format_key(*m, *c))
            .collect();
        keys.sort();
        keys
    }

    /// Format a key into a spec like `Ctrl+c` or `PageDown`.
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Esc => "Esc".to_string(),
            Tab => "Tab".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            Left => "Left".to_string(),
            Right => "Right".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            Char(c) => c.to_string(),
            _ => format!("{:?}", code),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", base)
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

/// Parse a key spec such as `Ctrl+c`, `PageDown` or `/`.
fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let s = spec.trim();
    let (mods, rest) = match s.strip_prefix("Ctrl+") {
        Some(after) => (KeyModifiers::CONTROL, after),
        None => (KeyModifiers::NONE, s),
    };
    let code = match rest {
        "Enter" => Enter,
        "Esc" | "Escape" => Esc,
        "Tab" => Tab,
        "Up" => Up,
        "Down" => Down,
        "Left" => Left,
        "Right" => Right,
        "PageUp" => PageUp,
        "PageDown" => PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Char(c),
                _ => return None,
            }
        }
    };
    Some((mods, code))
}

/// Parse an action name, including `JumpPage<N>` and `SortBy<Column>`.
fn parse_action(s: &str) -> Option<KeyAction> {
    let s = s.trim();
    if let Some(n) = s.strip_prefix("JumpPage") {
        return n.parse().ok().map(KeyAction::JumpPage);
    }
    if let Some(name) = s.strip_prefix("SortBy") {
        return Column::ALL.into_iter().find(|c| c.action_name() == name).map(KeyAction::SortBy);
    }
    match s {
        "Quit" => Some(KeyAction::Quit),
        "StartSearch" => Some(KeyAction::StartSearch),
        "CycleGender" => Some(KeyAction::CycleGender),
        "ResetFilters" => Some(KeyAction::ResetFilters),
        "MoveUp" => Some(KeyAction::MoveUp),
        "MoveDown" => Some(KeyAction::MoveDown),
        "PageUp" => Some(KeyAction::PageUp),
        "PageDown" => Some(KeyAction::PageDown),
        "ToggleHelp" => Some(KeyAction::ToggleHelp),
        "Ignore" => Some(KeyAction::Ignore),
        _ => None,
    }
}

/// Action name as written in `keybinds.conf`; the inverse of parsing.
pub fn format_action(a: KeyAction) -> String {
    match a {
        KeyAction::Quit => "Quit".into(),
        KeyAction::StartSearch => "StartSearch".into(),
        KeyAction::CycleGender => "CycleGender".into(),
        KeyAction::ResetFilters => "ResetFilters".into(),
        KeyAction::JumpPage(n) => format!("JumpPage{n}"),
        KeyAction::SortBy(c) => format!("SortBy{}", c.action_name()),
        KeyAction::MoveUp => "MoveUp".into(),
        KeyAction::MoveDown => "MoveDown".into(),
        KeyAction::PageUp => "PageUp".into(),
        KeyAction::PageDown => "PageDown".into(),
        KeyAction::ToggleHelp => "ToggleHelp".into(),
        KeyAction::Ignore => "Ignore".into(),
    }
}

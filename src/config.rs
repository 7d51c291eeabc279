//! Command-line flags and config file locations.
//!
//! Every flag can also be supplied through the environment. Config files
//! (`theme.conf`, `keybinds.conf`) hold presentation preferences only; no
//! filter or sort state is ever written to disk.

use std::path::PathBuf;

use clap::Parser;

use crate::source::DEFAULT_BASE_URL;

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "user-dashboard";

#[derive(Debug, Clone, Parser)]
#[command(name = "user-dashboard", version, about = "Browse, search, and sort random user records")]
pub struct Args {
    /// Base URL of the random-user API.
    #[arg(long, env = "USER_DASHBOARD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Theme file (key = value colors).
    #[arg(long, env = "USER_DASHBOARD_THEME")]
    pub theme: Option<PathBuf>,

    /// Keybinding file (Action = KeySpec).
    #[arg(long, env = "USER_DASHBOARD_KEYBINDS")]
    pub keybinds: Option<PathBuf>,

    /// Where to write logs. The terminal is in raw mode, so logs never go to stdout.
    #[arg(long, env = "USER_DASHBOARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directive, e.g. `info` or `user_dashboard=debug`.
    #[arg(long, env = "USER_DASHBOARD_LOG", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn theme_path(&self) -> PathBuf {
        self.theme.clone().unwrap_or_else(|| config_file_write_path("theme.conf"))
    }

    pub fn keybinds_path(&self) -> PathBuf {
        self.keybinds.clone().unwrap_or_else(|| config_file_write_path("keybinds.conf"))
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| config_file_write_path("user-dashboard.log"))
    }
}

/// `$XDG_CONFIG_HOME/user-dashboard` (or the platform equivalent).
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR))
}

/// Existing config file named `name`, checked in the working directory first,
/// then in [`config_dir`].
pub fn config_file_read_path(name: &str) -> Option<PathBuf> {
    let local = PathBuf::from(name);
    if local.is_file() {
        return Some(local);
    }
    config_dir().map(|d| d.join(name)).filter(|p| p.is_file())
}

/// Where a fresh config file named `name` should be created. Falls back to
/// the working directory when no config dir can be resolved or created.
pub fn config_file_write_path(name: &str) -> PathBuf {
    if let Some(existing) = config_file_read_path(name) {
        return existing;
    }
    match config_dir() {
        Some(dir) if std::fs::create_dir_all(&dir).is_ok() => dir.join(name),
        _ => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_api() {
        let args = Args::try_parse_from(["user-dashboard"]).unwrap();
        assert_eq!(args.base_url, DEFAULT_BASE_URL);
        assert_eq!(args.log_level, "info");
        assert!(args.theme.is_none());
    }

    #[test]
    fn explicit_paths_win() {
        let args = Args::try_parse_from([
            "user-dashboard",
            "--base-url",
            "http://localhost:8080/api/",
            "--theme",
            "/tmp/t.conf",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.base_url, "http://localhost:8080/api/");
        assert_eq!(args.theme_path(), PathBuf::from("/tmp/t.conf"));
        assert_eq!(args.log_level, "debug");
    }
}

//! Color theme and its `theme.conf` file.

use std::path::Path;

use ratatui::style::Color;
use tracing::warn;

/// Color palette for the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    /// Sort glyph and active page.
    pub accent: Color,
    /// Empty-result message.
    pub warning: Color,
}

impl Theme {
    /// Catppuccin Mocha.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),        // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),        // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            accent: Color::Rgb(0x89, 0xdc, 0xeb),       // sky
            warning: Color::Rgb(0xf3, 0x8b, 0xa8),      // red
        }
    }

    fn slots(&self) -> [(&'static str, Color); 12] {
        [
            ("text", self.text),
            ("muted", self.muted),
            ("title", self.title),
            ("border", self.border),
            ("header_bg", self.header_bg),
            ("header_fg", self.header_fg),
            ("status_bg", self.status_bg),
            ("status_fg", self.status_fg),
            ("highlight_fg", self.highlight_fg),
            ("highlight_bg", self.highlight_bg),
            ("accent", self.accent),
            ("warning", self.warning),
        ]
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Color> {
        Some(match key {
            "text" => &mut self.text,
            "muted" => &mut self.muted,
            "title" => &mut self.title,
            "border" => &mut self.border,
            "header_bg" => &mut self.header_bg,
            "header_fg" => &mut self.header_fg,
            "status_bg" => &mut self.status_bg,
            "status_fg" => &mut self.status_fg,
            "highlight_fg" => &mut self.highlight_fg,
            "highlight_bg" => &mut self.highlight_bg,
            "accent" => &mut self.accent,
            "warning" => &mut self.warning,
            _ => return None,
        })
    }

    /// Parse `key = color` lines over [`Theme::mocha`]. Unknown keys and bad
    /// colors are skipped.
    pub fn parse(contents: &str) -> Self {
        let mut theme = Self::mocha();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else { continue };
            if let (Some(slot), Some(color)) = (theme.slot_mut(key.trim()), parse_color(val)) {
                *slot = color;
            }
        }
        theme
    }

    pub fn from_file(path: &Path) -> Option<Self> {
        std::fs::read_to_string(path).ok().map(|c| Self::parse(&c))
    }

    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        let mut buf = String::from("# user-dashboard theme\n# Colors: #RRGGBB, RRGGBB, or 'reset'\n\n");
        for (key, color) in self.slots() {
            buf.push_str(&format!("{key} = {}\n", color_to_str(color)));
        }
        std::fs::write(path, buf)
    }

    /// Load `path`, creating it with [`Theme::mocha`] when missing.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let t = Self::mocha();
        if let Err(e) = t.write_file(path) {
            warn!(path = %path.display(), error = %e, "could not write default theme");
        }
        t
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

fn parse_color(s: &str) -> Option<Color> {
    let lower = s.trim().to_ascii_lowercase();
    if lower == "reset" {
        return Some(Color::Reset);
    }
    let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn color_to_str(c: Color) -> String {
    match c {
        Color::Rgb(r, g, b) => format!("#{r:02X}{g:02X}{b:02X}"),
        Color::Reset => "reset".to_string(),
        Color::Black => "#000000".to_string(),
        Color::Red => "#FF0000".to_string(),
        Color::Green => "#00FF00".to_string(),
        Color::Yellow => "#FFFF00".to_string(),
        Color::Blue => "#0000FF".to_string(),
        Color::Magenta => "#FF00FF".to_string(),
        Color::Cyan => "#00FFFF".to_string(),
        Color::Gray => "#B3B3B3".to_string(),
        Color::DarkGray => "#4D4D4D".to_string(),
        Color::LightRed => "#FF6666".to_string(),
        Color::LightGreen => "#66FF66".to_string(),
        Color::LightYellow => "#FFFF66".to_string(),
        Color::LightBlue => "#6666FF".to_string(),
        Color::LightMagenta => "#FF66FF".to_string(),
        Color::LightCyan => "#66FFFF".to_string(),
        Color::White => "#FFFFFF".to_string(),
        Color::Indexed(_) => "reset".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_overrides_known_keys_only() {
        let t = Theme::parse("# c\naccent = #010203\nbogus = #FFFFFF\nwarning = nothex\ntext=reset\n");
        assert_eq!(t.accent, Color::Rgb(1, 2, 3));
        assert_eq!(t.text, Color::Reset);
        assert_eq!(t.warning, Theme::mocha().warning);
    }

    #[test]
    fn parse_color_accepts_bare_hex() {
        assert_eq!(parse_color("ff8000"), Some(Color::Rgb(0xff, 0x80, 0x00)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#GG0000"), None);
    }
}

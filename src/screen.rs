//! This module renders the full-screen gateway banner.
use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Blank lines printed above the banner.
const TOP_MARGIN: usize = 8;

/// Used when the terminal size can't be queried (pipes, serial consoles).
pub const FALLBACK_WIDTH: u16 = 80;

pub const PRODUCT_LINE: &str = "🖤 ONYX-GATE - Hello World! 🖤";
pub const TAGLINE: &str = "The elegant gateway to unbreakable security";
pub const CONTINUE_PROMPT: &str = "Press Enter to continue...";
pub const TEST_MODE_NOTICE: &str = "[TEST MODE] Exiting after 2 seconds...";

/// Version details baked in at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_date: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            build_date: option_env!("ONYX_GATE_BUILD_DATE").unwrap_or("unknown"),
        }
    }
}

/// The banner text, top to bottom, without any padding.
pub fn banner_lines(info: &BuildInfo) -> Vec<String> {
    vec![
        PRODUCT_LINE.to_string(),
        TAGLINE.to_string(),
        String::new(),
        format!("Version: {}", info.version),
        format!("Build: {}", info.build_date),
        String::new(),
        CONTINUE_PROMPT.to_string(),
    ]
}

/// Left-pads `text` so it sits in the middle of `width` columns.
///
/// Text wider than `width` is returned unpadded.
pub fn center(text: &str, width: u16) -> String {
    let padding = (width as usize).saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

/// Current terminal width, or [`FALLBACK_WIDTH`] if there is no terminal.
pub fn terminal_width() -> u16 {
    match terminal::size() {
        Ok((width, _)) if width > 0 => width,
        _ => FALLBACK_WIDTH,
    }
}

/// Clears the screen and draws the banner centred in `width` columns.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_banner(out: &mut impl Write, info: &BuildInfo, width: u16) -> Result<()> {
    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    queue!(out, Print("\n".repeat(TOP_MARGIN)))?;

    for line in banner_lines(info) {
        if line.is_empty() {
            queue!(out, Print("\n"))?;
        } else {
            queue!(out, Print(center(&line, width)), Print("\n"))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Prints the test mode notice after a blank line.
pub fn render_test_notice(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", TEST_MODE_NOTICE)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> BuildInfo {
        BuildInfo {
            version: "1.2.3",
            build_date: "2025-01-31",
        }
    }

    #[test]
    fn banner_substitutes_build_info() {
        let lines = banner_lines(&info());
        assert_eq!(lines[0], PRODUCT_LINE);
        assert_eq!(lines[1], TAGLINE);
        assert!(lines.contains(&"Version: 1.2.3".to_string()));
        assert!(lines.contains(&"Build: 2025-01-31".to_string()));
        assert_eq!(lines.last().unwrap(), CONTINUE_PROMPT);
    }

    #[test]
    fn center_counts_display_columns() {
        // Wide characters take two columns each.
        assert_eq!(center("日本", 10), "   日本");
        assert_eq!(center("abcd", 10), "   abcd");
    }

    #[test]
    fn center_never_truncates() {
        assert_eq!(center(TAGLINE, 10), TAGLINE);
        assert_eq!(center("x", 0), "x");
    }

    #[test]
    fn render_clears_then_draws() {
        let mut out = Vec::new();
        render_banner(&mut out, &info(), 80).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\x1b[2J"));
        let product = text.find(PRODUCT_LINE).unwrap();
        let prompt = text.find(CONTINUE_PROMPT).unwrap();
        assert!(product < prompt);
        assert!(text.contains("Version: 1.2.3"));
        assert!(text.ends_with(&format!("{}\n", CONTINUE_PROMPT)));
    }

    #[test]
    fn test_notice_follows_blank_line() {
        let mut out = Vec::new();
        render_test_notice(&mut out).unwrap();
        assert_eq!(out, format!("\n{}\n", TEST_MODE_NOTICE).into_bytes());
    }
}

//! Glyph sets for drawing maze cells
//!
//! Provides classic ASCII glyphs and Unicode block glyphs. Every glyph is
//! three columns wide so the maze keeps a roughly square aspect.

use crossterm::style::Color;
use mz_core::CellState;
use strum::{Display, EnumString, VariantNames};

/// Glyph choice given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GraphicsMode {
    /// `[#]` walls, letters for entrance and exit
    #[default]
    Classic,
    /// Solid blocks and bullets
    Fancy,
    /// Fancy under a UTF-8 locale, classic otherwise
    Auto,
}

impl GraphicsMode {
    /// Replace `Auto` by a concrete mode using the process locale
    pub fn resolve(self) -> GraphicsMode {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    fn resolve_with(self, lookup: impl Fn(&str) -> Option<String>) -> GraphicsMode {
        match self {
            GraphicsMode::Auto => {
                if locale_is_utf8(lookup) {
                    GraphicsMode::Fancy
                } else {
                    GraphicsMode::Classic
                }
            }
            mode => mode,
        }
    }

    /// Glyph set drawing this mode
    pub fn glyphs(self) -> Box<dyn GlyphSet> {
        match self.resolve() {
            GraphicsMode::Fancy => Box::new(FancyGlyphs),
            _ => Box::new(ClassicGlyphs),
        }
    }
}

/// The effective locale is the first non-empty of `LC_ALL`, `LC_CTYPE` and
/// `LANG`; its codeset decides.
fn locale_is_utf8(lookup: impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .filter_map(lookup)
        .find(|value| !value.is_empty())
        .map(|locale| {
            let codeset = locale.to_ascii_lowercase().replace('-', "");
            codeset.contains("utf8")
        })
        .unwrap_or(false)
}

/// Set of glyphs used for rendering cells.
pub trait GlyphSet: Send + Sync {
    /// Three-column glyph for a cell state.
    fn cell_glyph(&self, state: CellState) -> &'static str;
}

/// ASCII glyph set.
pub struct ClassicGlyphs;

impl GlyphSet for ClassicGlyphs {
    fn cell_glyph(&self, state: CellState) -> &'static str {
        match state {
            CellState::Wall => "[#]",
            CellState::Path => "   ",
            CellState::Entrance => " S ",
            CellState::Exit => " E ",
            CellState::SolvedPath => " * ",
            // Explored dead ends read as open floor
            CellState::DeadEnd => "   ",
        }
    }
}

/// Unicode glyph set.
pub struct FancyGlyphs;

impl GlyphSet for FancyGlyphs {
    fn cell_glyph(&self, state: CellState) -> &'static str {
        match state {
            CellState::Wall => "███",
            CellState::Path => "   ",
            CellState::Entrance => " ▼ ",
            CellState::Exit => " ◆ ",
            CellState::SolvedPath => " • ",
            CellState::DeadEnd => " · ",
        }
    }
}

/// Foreground color for a cell state, `None` for the terminal default.
pub fn cell_color(state: CellState) -> Option<Color> {
    match state {
        CellState::Wall => Some(Color::DarkGrey),
        CellState::Path => None,
        CellState::Entrance => Some(Color::Cyan),
        CellState::Exit => Some(Color::Yellow),
        CellState::SolvedPath => Some(Color::Green),
        CellState::DeadEnd => Some(Color::Red),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_mode() {
        assert_eq!(GraphicsMode::from_str("fancy").unwrap(), GraphicsMode::Fancy);
        assert_eq!(GraphicsMode::from_str("classic").unwrap(), GraphicsMode::Classic);
        assert!(GraphicsMode::from_str("neon").is_err());
        assert_eq!(GraphicsMode::Auto.to_string(), "auto");
        assert_eq!(GraphicsMode::VARIANTS, &["classic", "fancy", "auto"]);
    }

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_auto_follows_locale() {
        let utf8 = env(&[("LANG", "en_US.UTF-8")]);
        assert_eq!(GraphicsMode::Auto.resolve_with(utf8), GraphicsMode::Fancy);

        let latin = env(&[("LANG", "de_DE.ISO-8859-1")]);
        assert_eq!(GraphicsMode::Auto.resolve_with(latin), GraphicsMode::Classic);

        assert_eq!(GraphicsMode::Auto.resolve_with(env(&[])), GraphicsMode::Classic);
    }

    #[test]
    fn test_lc_all_overrides_lang() {
        let vars = env(&[("LC_ALL", "C"), ("LANG", "fr_FR.utf8")]);
        assert_eq!(GraphicsMode::Auto.resolve_with(vars), GraphicsMode::Classic);

        // Empty values are skipped
        let vars = env(&[("LC_ALL", ""), ("LC_CTYPE", "C.UTF-8")]);
        assert_eq!(GraphicsMode::Auto.resolve_with(vars), GraphicsMode::Fancy);
    }

    #[test]
    fn test_explicit_modes_ignore_locale() {
        let utf8 = env(&[("LANG", "en_US.UTF-8")]);
        assert_eq!(GraphicsMode::Classic.resolve_with(utf8), GraphicsMode::Classic);
        assert_eq!(GraphicsMode::Fancy.resolve_with(env(&[])), GraphicsMode::Fancy);
        assert_eq!(GraphicsMode::Classic.glyphs().cell_glyph(CellState::Wall), "[#]");
        assert_eq!(GraphicsMode::Fancy.glyphs().cell_glyph(CellState::Wall), "███");
    }

    #[test]
    fn test_glyphs_are_three_columns() {
        for state in CellState::iter() {
            assert_eq!(ClassicGlyphs.cell_glyph(state).chars().count(), 3);
            assert_eq!(FancyGlyphs.cell_glyph(state).chars().count(), 3);
        }
    }

    #[test]
    fn test_classic_glyphs() {
        assert_eq!(ClassicGlyphs.cell_glyph(CellState::Wall), "[#]");
        assert_eq!(ClassicGlyphs.cell_glyph(CellState::SolvedPath), " * ");
        assert_eq!(
            ClassicGlyphs.cell_glyph(CellState::DeadEnd),
            ClassicGlyphs.cell_glyph(CellState::Path)
        );
    }
}

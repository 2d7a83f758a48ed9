use std::collections::HashMap;

use super::Color;

/// A single palette entry: either a concrete sRGB color or a reference to
/// another entry by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeEntry {
    /// Straight sRGB bytes, fully opaque.
    Rgb(u8, u8, u8),
    /// Resolves to whatever the named entry resolves to.
    Alias(String),
}

impl ThemeEntry {
    #[inline]
    pub fn alias(name: impl Into<String>) -> Self {
        ThemeEntry::Alias(name.into())
    }
}

/// Named color palette.
///
/// The default palette is dark: five greys from `black-1` (lightest) to
/// `black-5` (near black), five light greys from `white-1` (pure white) to
/// `white-5`, green accents, and semantic aliases such as `bg` and `text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    entries: HashMap<String, ThemeEntry>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Creates an empty palette.
    pub fn empty() -> Self {
        Self { entries: HashMap::new() }
    }

    /// The stock dark palette.
    pub fn dark() -> Self {
        use ThemeEntry::Rgb;

        let rgb = [
            ("black-1", Rgb(82, 82, 82)),
            ("black-2", Rgb(61, 61, 61)),
            ("black-3", Rgb(46, 46, 46)),
            ("black-4", Rgb(31, 31, 31)),
            ("black-5", Rgb(15, 15, 15)),
            ("white-1", Rgb(255, 255, 255)),
            ("white-2", Rgb(242, 242, 242)),
            ("white-3", Rgb(230, 230, 230)),
            ("white-4", Rgb(217, 217, 217)),
            ("white-5", Rgb(204, 204, 204)),
            ("bd", Rgb(102, 102, 102)),
            ("highlight", Rgb(128, 128, 128)),
            ("bd-muted", Rgb(77, 77, 77)),
            ("highlight-muted", Rgb(102, 102, 102)),
            ("primary", Rgb(22, 219, 101)),
            ("secondary", Rgb(143, 255, 143)),
            ("success", Rgb(90, 191, 90)),
            ("warning", Rgb(212, 191, 77)),
            ("error", Rgb(191, 90, 90)),
        ];
        let aliases = [
            ("text", "white-2"),
            ("text-muted", "white-4"),
            ("bg-dark", "black-5"),
            ("bg", "black-3"),
            ("bg-light", "black-1"),
        ];

        let mut theme = Self::empty();
        for (name, entry) in rgb {
            theme.set(name, entry);
        }
        for (name, target) in aliases {
            theme.set(name, ThemeEntry::alias(target));
        }
        theme
    }

    /// Inserts or replaces an entry.
    pub fn set(&mut self, name: impl Into<String>, entry: ThemeEntry) {
        self.entries.insert(name.into(), entry);
    }

    /// Resolves `name` to a concrete color, following aliases.
    ///
    /// Returns `None` for unknown names, dangling aliases, and alias cycles.
    pub fn color(&self, name: &str) -> Option<Color> {
        let mut current = name;
        // A chain longer than the palette must revisit an entry.
        for _ in 0..=self.entries.len() {
            match self.entries.get(current)? {
                ThemeEntry::Rgb(r, g, b) => return Some(Color::from_srgb_u8(*r, *g, *b, 255)),
                ThemeEntry::Alias(target) => current = target,
            }
        }
        log::warn!("theme alias cycle while resolving '{name}'");
        None
    }

    /// Like [`color`](Self::color) but falls back to `fallback` when unresolved.
    pub fn color_or(&self, name: &str, fallback: Color) -> Color {
        self.color(name).unwrap_or(fallback)
    }

    /// Iterates entry names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_concrete_entries() {
        let theme = Theme::dark();
        assert_eq!(theme.color("primary"), Some(Color::from_srgb_u8(22, 219, 101, 255)));
        assert_eq!(theme.color("black-5"), Some(Color::from_srgb_u8(15, 15, 15, 255)));
    }

    #[test]
    fn resolves_aliases() {
        let theme = Theme::dark();
        assert_eq!(theme.color("bg-dark"), theme.color("black-5"));
        assert_eq!(theme.color("bg"), theme.color("black-3"));
        assert_eq!(theme.color("text"), theme.color("white-2"));
        assert_eq!(theme.color("text-muted"), theme.color("white-4"));
        assert_eq!(theme.color("bg-light"), theme.color("black-1"));
    }

    #[test]
    fn unknown_and_dangling_names() {
        let mut theme = Theme::dark();
        assert_eq!(theme.color("nope"), None);
        theme.set("ghost", ThemeEntry::alias("missing"));
        assert_eq!(theme.color("ghost"), None);
    }

    #[test]
    fn alias_cycle_is_rejected() {
        let mut theme = Theme::empty();
        theme.set("a", ThemeEntry::alias("b"));
        theme.set("b", ThemeEntry::alias("a"));
        assert_eq!(theme.color("a"), None);

        theme.set("self", ThemeEntry::alias("self"));
        assert_eq!(theme.color("self"), None);
    }

    #[test]
    fn overrides_replace_entries() {
        let mut theme = Theme::dark();
        theme.set("primary", ThemeEntry::Rgb(0, 0, 255));
        assert_eq!(theme.color("primary"), Some(Color::from_srgb_u8(0, 0, 255, 255)));

        let fallback = Color::transparent();
        assert_eq!(theme.color_or("unset", fallback), fallback);
    }

    #[test]
    fn dark_palette_has_all_names() {
        let theme = Theme::dark();
        assert_eq!(theme.names().count(), 24);
        assert!(theme.names().all(|n| theme.color(n).is_some()));
    }
}

// File: crates/series-core/src/theme.rs
// Summary: Color themes (CSS color strings) and the per-render palette cursor.

/// Colors a renderer needs, as SVG/CSS color strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub marker: &'static str,
    /// Line colors cycled per series; never empty.
    pub series: &'static [&'static str],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            grid: "#e6e6eb",
            axis_line: "#3c3c46",
            axis_label: "#14141e",
            marker: "#69b3a2",
            series: &["steelblue", "#dc3c3c", "#149a5a", "#c88c14"],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            marker: "#ffe646",
            series: &["#40a0ff", "#dc5050", "#28c878", "#609cff"],
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: "#fdf6e3", // base3
            grid: "#eee8d5",       // base2
            axis_line: "#657b83",  // base00
            axis_label: "#002b36", // base03
            marker: "#2aa198",     // cyan
            series: &["#268bd2", "#dc322f", "#859900", "#cb4b16"],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: "#000000",
            grid: "#222222",
            axis_line: "#ffffff",
            axis_label: "#ffffff",
            marker: "#ffff00",
            series: &["#00ffff", "#ff00ff", "#00ff00", "#ff8000"],
        }
    }

    /// Fresh cursor over this theme's series colors, starting at the first.
    pub fn palette(&self) -> PaletteCursor {
        PaletteCursor::new(self.series)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

/// Hands out series colors in order, wrapping around.
/// Create one per render pass and drop it afterwards.
#[derive(Clone, Debug)]
pub struct PaletteCursor {
    colors: &'static [&'static str],
    index: usize,
}

impl PaletteCursor {
    pub fn new(colors: &'static [&'static str]) -> Self {
        Self { colors, index: 0 }
    }

    /// Colors handed out so far.
    pub fn position(&self) -> usize { self.index }

    /// Next color; `"black"` if the palette is empty.
    pub fn next_color(&mut self) -> &'static str {
        let color = match self.colors.len() {
            0 => "black",
            n => self.colors[self.index % n],
        };
        self.index += 1;
        color
    }
}

impl Iterator for PaletteCursor {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_color())
    }
}

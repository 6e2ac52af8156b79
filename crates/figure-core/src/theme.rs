// File: crates/figure-core/src/theme.rs
// Summary: Light/Dark theming for figure rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub annotation: skia::Color,
    pub marker: skia::Color,
    pub arrow: skia::Color,
    /// Bar fills, assigned to bar series in the order they were added.
    pub palette: [skia::Color; 4],
}

impl Theme {
    /// Report figures render on white, like the document they embed into.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 228, 228, 233),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 90, 90, 100),
            title: skia::Color::from_argb(255, 20, 20, 30),
            annotation: skia::Color::from_argb(255, 70, 70, 80),
            marker: skia::Color::from_argb(255, 32, 120, 200),
            arrow: skia::Color::from_argb(255, 60, 60, 70),
            palette: [
                skia::Color::from_argb(255, 42, 110, 187),
                skia::Color::from_argb(255, 232, 150, 58),
                skia::Color::from_argb(255, 60, 160, 96),
                skia::Color::from_argb(255, 196, 78, 82),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            annotation: skia::Color::from_argb(255, 190, 190, 200),
            marker: skia::Color::from_argb(255, 64, 160, 255),
            arrow: skia::Color::from_argb(255, 200, 200, 210),
            palette: [
                skia::Color::from_argb(255, 96, 156, 255),
                skia::Color::from_argb(255, 240, 170, 80),
                skia::Color::from_argb(255, 80, 200, 130),
                skia::Color::from_argb(255, 220, 100, 100),
            ],
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

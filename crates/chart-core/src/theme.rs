// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark palettes; `primary` is the accent a screen paints its series with.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub primary: skia::Color,
    pub accent: skia::Color,
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            primary: skia::Color::from_argb(255, 0x00, 0x85, 0x77),
            accent: skia::Color::from_argb(255, 0xd8, 0x1b, 0x60),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            primary: skia::Color::from_argb(255, 0x4d, 0xb6, 0xac),
            accent: skia::Color::from_argb(255, 0xf0, 0x62, 0x92),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            primary: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            accent: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name` (case-insensitive, `_` and `-` interchangeable),
/// falling back to light.
pub fn find(name: &str) -> Theme {
    let wanted = name.trim().replace('_', "-");
    match presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(&wanted)) {
        Some(t) => t,
        None => {
            tracing::warn!(name, "unknown theme, using light");
            Theme::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_presets_by_name() {
        assert_eq!(find("dark").name, "dark");
        assert_eq!(find("High_Contrast_Dark").name, "high-contrast-dark");
        assert_eq!(find("neon").name, "light");
    }

    #[test]
    fn light_primary_is_teal() {
        assert_eq!(Theme::default().primary, skia::Color::from_rgb(0x00, 0x85, 0x77));
    }
}

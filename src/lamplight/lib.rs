//! # Lamplight - Themed Terminal Templates
//!
//! Renders minijinja templates into terminal text, with styling kept out of the
//! templates themselves. A template names *what* something is (`style("done")`), and
//! a [`Theme`] decides how that looks. A [`ThemePair`] holds one theme for light
//! terminals and one for dark ones; the caller picks with a [`ColorMode`].
//!
//! ```rust
//! use lamplight::{render_with_color, Theme};
//! use console::Style;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Day { label: String, done: usize, total: usize }
//!
//! let theme = Theme::new()
//!     .add("label", Style::new().bold())
//!     .add("count", Style::new().green());
//!
//! let out = render_with_color(
//!     r#"{{ label | style("label") }}: {{ done | style("count") }}/{{ total }}"#,
//!     &Day { label: "Thu, Jan 1".into(), done: 2, total: 4 },
//!     &theme,
//!     false,
//! ).unwrap();
//! assert_eq!(out, "Thu, Jan 1: 2/4");
//! ```
//!
//! ## Template helpers
//!
//! Besides `style(name)`, every environment gets:
//! - `pad(width)`: left-aligns a value to `width` terminal columns (wide glyphs count double)
//! - `rule(width)`: a horizontal line of `width` box-drawing characters
//!
//! ## Color
//!
//! [`render`] and [`Renderer::new`] ask `console` whether stdout takes colors. Pass an
//! explicit flag to [`render_with_color`] / [`Renderer::with_color`] to honor things
//! like `--no-color`. Without color the `style` filter returns the plain text.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

/// Prefix shown in front of text whose style name is not in the theme.
pub const MISSING_STYLE_MARK: &str = "(!?)";

/// Named styles applied through the `style` template filter.
///
/// An unknown name marks the text with [`MISSING_STYLE_MARK`] so typos in templates
/// show up instead of silently rendering unstyled.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a named style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Styles `text` with ANSI codes, or `text` unchanged when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_MARK, text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// A light and a dark variant of the same set of style names.
#[derive(Clone)]
pub struct ThemePair {
    light: Theme,
    dark: Theme,
}

impl ThemePair {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    pub fn pick(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Style names present in one variant but not the other.
    pub fn mismatched_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .light
            .styles
            .keys()
            .filter(|k| !self.dark.has(k))
            .chain(self.dark.styles.keys().filter(|k| !self.light.has(k)))
            .cloned()
            .collect();
        names.sort();
        names
    }
}

/// Renders `template` with color if stdout supports it.
pub fn render<T: Serialize>(template: &str, data: &T, theme: &Theme) -> Result<String, Error> {
    render_with_color(template, data, theme, stdout_has_color())
}

pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = environment(theme.clone(), use_color);
    env.add_template_owned("_inline".to_string(), template.to_string())?;
    env.get_template("_inline")?.render(data)
}

/// Renders named templates registered up front; each is compiled once.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self::with_color(theme, stdout_has_color())
    }

    pub fn with_color(theme: Theme, use_color: bool) -> Self {
        Self {
            env: environment(theme, use_color),
        }
    }

    /// Compiles and registers `source` as `name`. Templates may `{% include %}` each
    /// other by name.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

fn stdout_has_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Block tags swallow their own line break and leading indentation, so templates can
/// be laid out like the output they produce.
fn environment(theme: Theme, use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    env.add_filter("pad", |value: Value, width: usize| -> String {
        pad_to_width(&value.to_string(), width)
    });
    env.add_function("rule", |width: usize| -> String { "─".repeat(width) });
    env
}

/// Left-aligns `text` in `width` display columns. Longer text is returned as is.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = text.width();
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_style_is_marked() {
        let theme = Theme::new();
        assert_eq!(theme.apply("nope", "hello", true), "(!?) hello");
        assert_eq!(theme.apply("nope", "hello", false), "(!?) hello");
    }

    #[test]
    fn plain_mode_strips_styling() {
        let theme = Theme::new().add("red", Style::new().red().force_styling(true));
        let out = render_with_color(
            r#"{{ msg | style("red") }}"#,
            &json!({ "msg": "warn" }),
            &theme,
            false,
        )
        .unwrap();
        assert_eq!(out, "warn");
    }

    #[test]
    fn color_mode_emits_ansi() {
        let theme = Theme::new().add("bold", Style::new().bold().force_styling(true));
        let out = render_with_color(
            r#"{{ msg | style("bold") }}"#,
            &json!({ "msg": "Genesis" }),
            &theme,
            true,
        )
        .unwrap();
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("Genesis"));
    }

    #[test]
    fn pad_counts_display_columns() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("✓", 3), "✓  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }

    #[test]
    fn pad_filter_and_rule_function() {
        let out = render_with_color(
            r#"[{{ name | pad(6) }}]{{ rule(3) }}"#,
            &json!({ "name": "Ruth" }),
            &Theme::new(),
            false,
        )
        .unwrap();
        assert_eq!(out, "[Ruth  ]───");
    }

    #[test]
    fn renderer_supports_includes() {
        let theme = Theme::new().add("title", Style::new().bold());
        let mut renderer = Renderer::with_color(theme, false);
        renderer
            .add_template("header", r#"{{ title | style("title") }}"#)
            .unwrap();
        renderer
            .add_template("page", r#"{% include "header" %}: {{ body }}"#)
            .unwrap();

        let out = renderer
            .render("page", &json!({ "title": "Wisdom", "body": "Psalms 1" }))
            .unwrap();
        assert_eq!(out, "Wisdom: Psalms 1");
    }

    #[test]
    fn block_tags_do_not_leave_blank_lines() {
        let template = "{% for b in books %}\n  {% if b %}\n{{ b }}\n  {% endif %}\n{% endfor %}\n";
        let out = render_with_color(
            template,
            &json!({ "books": ["Mark", "", "Luke"] }),
            &Theme::new(),
            false,
        )
        .unwrap();
        assert_eq!(out, "Mark\nLuke\n");
    }

    #[test]
    fn renderer_unknown_template_errors() {
        let renderer = Renderer::with_color(Theme::new(), false);
        assert!(renderer.render("missing", &json!({})).is_err());
    }

    #[test]
    fn syntax_errors_surface() {
        assert!(render_with_color("{{ unclosed", &json!({}), &Theme::new(), false).is_err());
    }

    #[test]
    fn pair_picks_by_mode_and_reports_gaps() {
        let pair = ThemePair::new(
            Theme::new().add("a", Style::new()).add("b", Style::new()),
            Theme::new().add("a", Style::new()).add("c", Style::new()),
        );
        assert!(pair.pick(ColorMode::Light).has("b"));
        assert!(pair.pick(ColorMode::Dark).has("c"));
        assert_eq!(pair.mismatched_names(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn rgb_grayscale_and_cube() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert!((232..=255).contains(&rgb_to_ansi256((128, 128, 128))));
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }
}

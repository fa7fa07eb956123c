//! Tappad markup rendering.
//!
//! The fragment shape lives in a single named template constant with
//! `${...}` placeholders, substituted in one pass. The exact output shape
//! (annotation line, blank separators, attribute layout) is part of the
//! contract: the generated text is pasted into the cube view's page
//! markup and consumers rely on it positionally.

use std::sync::LazyLock;

use regex::Regex;

use crate::grid::Coordinate;
use crate::margins::Margin;

/// Markup emitted for one tappad.
///
/// `{StaticResource ...}` is XAML syntax and passes through verbatim; only
/// `${...}` placeholders are substituted.
pub const TAPPAD_TEMPLATE: &str = r#"<Rectangle Tap="nut_Tap"
           Opacity="{StaticResource tappadOpacity}"
           p:Name="tappad_${x}_${y}_${z}"
           Hold="cell_Hold"
           HorizontalAlignment="Left"
           Height="{StaticResource tappadHeight}"
           Width="{StaticResource tappadWidth}"
           VerticalAlignment="Top"
           Margin="${margin}"
           Fill="Bisque">
    <Rectangle.Resources>
        <System:Int32 x:Key="HomeX">${x}</System:Int32>
        <System:Int32 x:Key="HomeY">${y}</System:Int32>
        <System:Int32 x:Key="HomeZ">${z}</System:Int32>
    </Rectangle.Resources>
</Rectangle>"#;

/// Regex for matching `${...}` placeholders in the template.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([a-z]+)\}").expect("valid regex"));

/// One-line comment identifying a tappad in the emitted document.
#[must_use]
pub fn annotation(cell: Coordinate) -> String {
    format!("<!-- TapPad {cell} -->")
}

/// Renders the tappad fragment for one cell.
///
/// Single-pass substitution; an unknown placeholder resolves to the empty
/// string rather than surviving into the output.
#[must_use]
pub fn render_tappad(cell: Coordinate, margin: Margin) -> String {
    PLACEHOLDER_RE
        .replace_all(TAPPAD_TEMPLATE, |caps: &regex::Captures| match &caps[1] {
            "x" => cell.x.to_string(),
            "y" => cell.y.to_string(),
            "z" => cell.z.to_string(),
            "margin" => margin.to_string(),
            _ => String::new(),
        })
        .into_owned()
}

/// Complete emitted block for one cell: a blank separator line, the
/// annotation, a blank line, then the fragment.
#[must_use]
pub fn render_block(cell: Coordinate, margin: Margin) -> String {
    format!("\n{}\n\n{}\n", annotation(cell), render_tappad(cell, margin))
}

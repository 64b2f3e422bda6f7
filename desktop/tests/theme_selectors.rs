#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The chart pages rely on a handful of structural classes in the shared theme
(`ui/assets/theme/main.css`). A substring check is enough to catch a refactor
that drops or renames one of them before it ships in an embedded build.

When a component's markup changes class names, adjust REQUIRED_SELECTORS too.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Toolbar
    ".chart-toolbar {",
    ".chart-toolbar__select",
    ".chart-toolbar__avatar",
    // Panel states
    ".chart-panel",
    ".chart-loading",
    ".chart-placeholder",
    ".chart-error",
    // SVG parts
    ".chart {",
    ".chart__bar",
    ".chart__span",
    ".chart__slice",
    ".chart__legend",
    ".chart__tick",
    ".chart-calendar__day",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 1_500,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn panel_states_are_all_styled() {
    let states = [".chart-loading", ".chart-placeholder", ".chart-error"];
    let missing: Vec<_> = states.iter().filter(|s| !THEME_CSS.contains(**s)).collect();
    assert!(missing.is_empty(), "Unstyled chart panel states: {missing:?}");
}

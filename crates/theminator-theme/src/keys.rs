//! Color key classification.
//!
//! Workbench color keys look like `tab.activeBackground`: a category
//! (`tab`) that groups related UI elements under one hue, and a name
//! (`activeBackground`) that says what kind of surface the color paints.
//! Only the first `.` separates the two.

use crate::keys::Role::{
    Background, DimmedBackground, DimmedForeground, Foreground, Neutral, ReuseBackground,
    ReuseForeground,
};

/// Split a key into `(category, name)` at its first `.`.
///
/// A key without a `.` has the empty category.
///
/// ```
/// use theminator_theme::keys::split;
///
/// assert_eq!(split("tab.activeBackground"), ("tab", "activeBackground"));
/// assert_eq!(split("a.b.c"), ("a", "b.c"));
/// assert_eq!(split("foreground"), ("", "foreground"));
/// ```
#[must_use]
pub fn split(key: &str) -> (&str, &str) {
    key.split_once('.').unwrap_or(("", key))
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// How the generator colors a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The background, copied verbatim.
    ReuseBackground,
    /// The derived editor foreground, copied verbatim.
    ///
    /// This overrides the foreground band: on a background where 7:1 is out
    /// of reach these keys still get the foreground, while every
    /// [`Foreground`](Role::Foreground) key is omitted.
    ReuseForeground,
    /// A fixed blend from background toward foreground (inactive tab rows,
    /// group headers).
    DimmedBackground,
    /// A stronger fixed blend toward foreground (inactive tab labels).
    DimmedForeground,
    /// Surfaces: low contrast against the background.
    Background,
    /// Text and icons: high contrast against the background.
    Foreground,
    /// Everything else: mid contrast.
    Neutral,
}

impl Role {
    /// Whether the color is found by contrast solving rather than copied
    /// or blended.
    #[must_use]
    pub const fn is_contrast_solved(self) -> bool {
        matches!(self, Background | Foreground | Neutral)
    }
}

/// Keys of the tab row and editor group header. These are always on
/// screen, so they are derived directly from background and foreground
/// instead of being solved independently.
const STRUCTURAL: &[(&str, Role)] = &[
    ("tab.unfocusedActiveBackground", ReuseBackground),
    ("tab.unfocusedHoverBackground", ReuseBackground),
    ("editorGroupHeader.tabsBorder", ReuseBackground),
    ("tab.inactiveBackground", DimmedBackground),
    ("tab.unfocusedInactiveBackground", DimmedBackground),
    ("editorGroupHeader.noTabsBackground", DimmedBackground),
    ("editorGroupHeader.tabsBackground", DimmedBackground),
    ("tab.inactiveForeground", DimmedForeground),
    ("tab.unfocusedInactiveForeground", DimmedForeground),
    ("tab.unfocusedActiveForeground", DimmedForeground),
    ("tab.unfocusedHoverForeground", DimmedForeground),
];

/// Decide the [`Role`] of a key. Matching is case-insensitive.
#[must_use]
pub fn classify(key: &str) -> Role {
    if let Some(&(_, role)) = STRUCTURAL.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
        return role;
    }

    let lower = key.to_ascii_lowercase();
    match lower.as_str() {
        "background" | "editor.background" => return ReuseBackground,
        "foreground" | "editor.foreground" => return ReuseForeground,
        _ => {}
    }
    if lower.ends_with(".border") || lower.ends_with(".activeborder") {
        return ReuseBackground;
    }

    let (category, name) = split(&lower);
    if category == "tab" && name.contains("border") {
        ReuseBackground
    } else if name.contains("background") {
        Background
    } else if name.contains("foreground") {
        Foreground
    } else {
        Neutral
    }
}

// ---------------------------------------------------------------------------
// ColorKey
// ---------------------------------------------------------------------------

/// A key borrowed from the request, pre-split into category and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorKey<'a> {
    raw: &'a str,
    category: &'a str,
    name: &'a str,
}

impl<'a> ColorKey<'a> {
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let (category, name) = split(raw);
        Self {
            raw,
            category,
            name,
        }
    }

    /// The full key, as requested.
    #[must_use]
    pub const fn raw(self) -> &'a str {
        self.raw
    }

    #[must_use]
    pub const fn category(self) -> &'a str {
        self.category
    }

    #[must_use]
    pub const fn name(self) -> &'a str {
        self.name
    }

    #[must_use]
    pub fn role(self) -> Role {
        classify(self.raw)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ── split ───────────────────────────────────────────────────────

    #[test]
    fn split_on_first_dot_only() {
        assert_eq!(split("editorGroupHeader.tabsBorder"), ("editorGroupHeader", "tabsBorder"));
        assert_eq!(split("x.y.z"), ("x", "y.z"));
    }

    #[test]
    fn split_without_dot_is_ungrouped() {
        assert_eq!(split("focusBorder"), ("", "focusBorder"));
        assert_eq!(split(""), ("", ""));
    }

    #[test]
    fn split_leading_dot() {
        assert_eq!(split(".hidden"), ("", "hidden"));
    }

    #[test]
    fn color_key_accessors() {
        let key = ColorKey::parse("statusBar.debuggingForeground");
        assert_eq!(key.raw(), "statusBar.debuggingForeground");
        assert_eq!(key.category(), "statusBar");
        assert_eq!(key.name(), "debuggingForeground");
        assert_eq!(key.role(), Foreground);
    }

    // ── classify ────────────────────────────────────────────────────

    #[test]
    fn background_keys_are_reused() {
        assert_eq!(classify("background"), ReuseBackground);
        assert_eq!(classify("editor.background"), ReuseBackground);
        assert_eq!(classify("panel.border"), ReuseBackground);
        assert_eq!(classify("statusBarItem.activeBorder"), ReuseBackground);
        assert_eq!(classify("Panel.BORDER"), ReuseBackground);
    }

    #[test]
    fn foreground_keys_are_reused() {
        assert_eq!(classify("foreground"), ReuseForeground);
        assert_eq!(classify("editor.foreground"), ReuseForeground);
    }

    #[test]
    fn tab_borders_are_reused() {
        assert_eq!(classify("tab.activeBorderTop"), ReuseBackground);
        assert_eq!(classify("tab.inactiveModifiedBorder"), ReuseBackground);
        assert_eq!(classify("tab.dragAndDropBorder"), ReuseBackground);
    }

    #[test]
    fn structural_keys() {
        assert_eq!(classify("tab.inactiveBackground"), DimmedBackground);
        assert_eq!(classify("editorGroupHeader.tabsBackground"), DimmedBackground);
        assert_eq!(classify("tab.unfocusedInactiveForeground"), DimmedForeground);
        assert_eq!(classify("tab.unfocusedHoverBackground"), ReuseBackground);
        assert_eq!(classify("editorGroupHeader.tabsBorder"), ReuseBackground);
        assert_eq!(classify("TAB.INACTIVEBACKGROUND"), DimmedBackground);
    }

    #[test]
    fn contrast_roles_from_name() {
        assert_eq!(classify("sideBar.background"), Background);
        assert_eq!(classify("list.hoverBackground"), Background);
        assert_eq!(classify("tab.activeForeground"), Foreground);
        assert_eq!(classify("badge.foreground"), Foreground);
        assert_eq!(classify("focusBorder"), Neutral);
        assert_eq!(classify("editorCursor.foreground"), Foreground);
        assert_eq!(classify("scrollbarSlider.hoverBackground"), Background);
        assert_eq!(classify("editorLink.activeForeground"), Foreground);
        assert_eq!(classify("textLink.active"), Neutral);
    }

    #[test]
    fn non_tab_border_names_are_not_reused() {
        // Only keys *ending* in ".border" reuse the background outside tabs.
        assert_eq!(classify("editorGroup.dropIntoPromptBorder"), Neutral);
    }

    #[test]
    fn only_contrast_roles_are_solved() {
        assert!(Background.is_contrast_solved());
        assert!(Foreground.is_contrast_solved());
        assert!(Neutral.is_contrast_solved());
        assert!(!ReuseBackground.is_contrast_solved());
        assert!(!DimmedForeground.is_contrast_solved());
    }
}

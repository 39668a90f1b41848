//! Builtin workbench color keys, a ready-made request.
//!
//! Editors own the authoritative key list; this is a representative
//! subset covering the chrome that is always on screen (tabs, group
//! headers, side bar, status bar, activity bar) plus common widgets.

/// Common workbench color keys, grouped by category.
pub const WORKBENCH_KEYS: &[&str] = &[
    // ── Base ──────────────────────────────────────────────────
    "foreground",
    "focusBorder",
    "descriptionForeground",
    "errorForeground",
    "icon.foreground",
    "selection.background",
    "widget.border",
    "widget.shadow",
    // ── Editor ────────────────────────────────────────────────
    "editor.background",
    "editor.foreground",
    "editor.lineHighlightBackground",
    "editor.lineHighlightBorder",
    "editor.selectionBackground",
    "editor.selectionForeground",
    "editor.inactiveSelectionBackground",
    "editor.findMatchBackground",
    "editor.findMatchHighlightBackground",
    "editor.wordHighlightBackground",
    "editor.hoverHighlightBackground",
    "editorCursor.foreground",
    "editorCursor.background",
    "editorLineNumber.foreground",
    "editorLineNumber.activeForeground",
    "editorWhitespace.foreground",
    "editorIndentGuide.background1",
    "editorIndentGuide.activeBackground1",
    "editorRuler.foreground",
    "editorLink.activeForeground",
    "editorError.foreground",
    "editorWarning.foreground",
    "editorInfo.foreground",
    "editorGutter.background",
    "editorWidget.background",
    "editorWidget.foreground",
    "editorWidget.border",
    "editorHoverWidget.background",
    "editorHoverWidget.border",
    "editorSuggestWidget.background",
    "editorSuggestWidget.foreground",
    "editorSuggestWidget.selectedBackground",
    "editorOverviewRuler.border",
    // ── Editor groups & tabs ──────────────────────────────────
    "editorGroup.border",
    "editorGroup.dropBackground",
    "editorGroupHeader.noTabsBackground",
    "editorGroupHeader.tabsBackground",
    "editorGroupHeader.tabsBorder",
    "editorGroupHeader.border",
    "tab.activeBackground",
    "tab.unfocusedActiveBackground",
    "tab.activeForeground",
    "tab.border",
    "tab.activeBorder",
    "tab.unfocusedActiveBorder",
    "tab.activeBorderTop",
    "tab.unfocusedActiveBorderTop",
    "tab.lastPinnedBorder",
    "tab.inactiveBackground",
    "tab.unfocusedInactiveBackground",
    "tab.inactiveForeground",
    "tab.unfocusedActiveForeground",
    "tab.unfocusedInactiveForeground",
    "tab.hoverBackground",
    "tab.unfocusedHoverBackground",
    "tab.hoverForeground",
    "tab.unfocusedHoverForeground",
    "tab.hoverBorder",
    "tab.unfocusedHoverBorder",
    "tab.activeModifiedBorder",
    "tab.inactiveModifiedBorder",
    "tab.unfocusedActiveModifiedBorder",
    "tab.unfocusedInactiveModifiedBorder",
    "tab.selectedBackground",
    "tab.selectedForeground",
    "tab.selectedBorderTop",
    "tab.dragAndDropBorder",
    // ── Side bar ──────────────────────────────────────────────
    "sideBar.background",
    "sideBar.foreground",
    "sideBar.border",
    "sideBarTitle.foreground",
    "sideBarSectionHeader.background",
    "sideBarSectionHeader.foreground",
    "sideBarSectionHeader.border",
    // ── Activity bar ──────────────────────────────────────────
    "activityBar.background",
    "activityBar.foreground",
    "activityBar.inactiveForeground",
    "activityBar.border",
    "activityBar.activeBorder",
    "activityBar.activeBackground",
    "activityBarBadge.background",
    "activityBarBadge.foreground",
    // ── Status bar ────────────────────────────────────────────
    "statusBar.background",
    "statusBar.foreground",
    "statusBar.border",
    "statusBar.debuggingBackground",
    "statusBar.debuggingForeground",
    "statusBar.noFolderBackground",
    "statusBarItem.activeBackground",
    "statusBarItem.hoverBackground",
    "statusBarItem.remoteBackground",
    "statusBarItem.remoteForeground",
    // ── Title bar ─────────────────────────────────────────────
    "titleBar.activeBackground",
    "titleBar.activeForeground",
    "titleBar.inactiveBackground",
    "titleBar.inactiveForeground",
    "titleBar.border",
    // ── Panel ─────────────────────────────────────────────────
    "panel.background",
    "panel.border",
    "panelTitle.activeBorder",
    "panelTitle.activeForeground",
    "panelTitle.inactiveForeground",
    // ── Lists ─────────────────────────────────────────────────
    "list.activeSelectionBackground",
    "list.activeSelectionForeground",
    "list.inactiveSelectionBackground",
    "list.inactiveSelectionForeground",
    "list.hoverBackground",
    "list.hoverForeground",
    "list.focusBackground",
    "list.focusForeground",
    "list.highlightForeground",
    "list.errorForeground",
    "list.warningForeground",
    // ── Inputs & buttons ──────────────────────────────────────
    "input.background",
    "input.foreground",
    "input.border",
    "input.placeholderForeground",
    "inputOption.activeBorder",
    "dropdown.background",
    "dropdown.foreground",
    "dropdown.border",
    "button.background",
    "button.foreground",
    "button.hoverBackground",
    "badge.background",
    "badge.foreground",
    "checkbox.background",
    "checkbox.foreground",
    "checkbox.border",
    // ── Scrollbars & progress ─────────────────────────────────
    "scrollbar.shadow",
    "scrollbarSlider.background",
    "scrollbarSlider.hoverBackground",
    "scrollbarSlider.activeBackground",
    "progressBar.background",
    // ── Terminal ──────────────────────────────────────────────
    "terminal.background",
    "terminal.foreground",
    "terminal.border",
    "terminalCursor.foreground",
    "terminal.ansiBlack",
    "terminal.ansiRed",
    "terminal.ansiGreen",
    "terminal.ansiYellow",
    "terminal.ansiBlue",
    "terminal.ansiMagenta",
    "terminal.ansiCyan",
    "terminal.ansiWhite",
    // ── Links ─────────────────────────────────────────────────
    "textLink.foreground",
    "textLink.activeForeground",
    "textBlockQuote.background",
    "textBlockQuote.border",
    "textCodeBlock.background",
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

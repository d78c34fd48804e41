//! Centralized shortcut and action system.
//!
//! This module maps keyboard shortcuts to actions, connecting the help text
//! definitions with the event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context name for the main fretboard view.
pub const MAIN_CONTEXT: &str = "main";
/// Context name for the help overlay.
pub const HELP_CONTEXT: &str = "help";

/// All possible actions in the application.
///
/// This enum is the bridge between keyboard shortcuts and application
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Move cursor to the next higher string
    NavigateUp,
    /// Move cursor to the next lower string
    NavigateDown,
    /// Move cursor one fret toward the nut
    NavigateLeft,
    /// Move cursor one fret toward the body
    NavigateRight,
    /// Jump to the open string
    JumpToFirst,
    /// Jump to the last fret
    JumpToLast,

    // === SELECTION ===
    /// Toggle the position under the cursor
    ToggleCurrent,
    /// Clear all selections
    ClearAll,
    /// Copy the selection list to the system clipboard
    CopySelections,

    // === DISPLAY ===
    /// Show or hide note names
    ToggleNoteVisibility,
    /// Switch to the next tuning preset
    CycleTuning,

    // === HELP ===
    /// Open or close the help overlay
    ToggleHelp,
    /// Scroll help up
    ScrollUp,
    /// Scroll help down
    ScrollDown,

    // === GENERAL ===
    /// Close overlays / dismiss messages
    Cancel,
    /// Exit the application
    Quit,
}

impl Action {
    /// Get the action ID string used in help.toml
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",

            Self::ToggleCurrent => "toggle_current",
            Self::ClearAll => "clear_all",
            Self::CopySelections => "copy_selections",

            Self::ToggleNoteVisibility => "toggle_notes",
            Self::CycleTuning => "cycle_tuning",

            Self::ToggleHelp => "toggle_help",
            Self::ScrollUp => "scroll_up",
            Self::ScrollDown => "scroll_down",

            Self::Cancel => "cancel",
            Self::Quit => "quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for character keys since the character already
    /// carries the case; terminals disagree on whether they report it.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
pub struct ShortcutRegistry {
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Char('0'), M::NONE, Action::JumpToFirst);
        self.register(ctx, K::Char('$'), M::NONE, Action::JumpToLast);

        // === SELECTION ===
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleCurrent);
        self.register(ctx, K::Enter, M::NONE, Action::ToggleCurrent);
        self.register(ctx, K::Char('c'), M::NONE, Action::ClearAll);
        self.register(ctx, K::Char('y'), M::NONE, Action::CopySelections);

        // === DISPLAY ===
        self.register(ctx, K::Char('v'), M::NONE, Action::ToggleNoteVisibility);
        self.register(ctx, K::Char('t'), M::NONE, Action::CycleTuning);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = HELP_CONTEXT;

        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Cancel);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register(
        &mut self,
        context: &str,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

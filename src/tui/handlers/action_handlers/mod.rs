//! Action handlers organized by category

/// Note visibility and tuning handlers
pub mod display;

/// Cursor navigation handlers
pub mod navigation;

/// Popup and overlay management handlers
pub mod popups;

/// Selection handlers (toggle, clear, copy)
pub mod selection;

//! Mobile navigation menu state.
//!
//! Every input that can open or close the menu is funnelled through
//! [`MenuController::handle`], which yields one [`MenuView`] describing the
//! toggle attribute, the panel class and the body scroll lock together. The
//! web layer applies the view as a unit, so the three never drift apart.

use crate::constants::{KEY_ESCAPE, OVERFLOW_LOCKED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Inputs recognised by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger toggle was clicked.
    ToggleActivated,
    /// A navigation link inside the panel was clicked.
    LinkActivated,
    /// A click landed outside both the toggle and the panel.
    OutsidePointer,
    EscapePressed,
}

impl MenuEvent {
    /// Keyboard keys that affect the menu.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        (key == KEY_ESCAPE).then_some(Self::EscapePressed)
    }
}

/// DOM-facing projection of a [`MenuState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub expanded: bool,
    pub menu_active: bool,
    /// Inline `overflow` for the document body; `None` clears it.
    pub body_overflow: Option<&'static str>,
}

impl MenuView {
    #[must_use]
    pub const fn for_state(state: MenuState) -> Self {
        let open = state.is_open();
        Self {
            expanded: open,
            menu_active: open,
            body_overflow: if open { Some(OVERFLOW_LOCKED) } else { None },
        }
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> MenuState {
        self.state
    }

    /// Apply an input. Returns the view to render when the state changed.
    ///
    /// Close requests while already closed return `None` so callers skip
    /// redundant DOM writes.
    pub fn handle(&mut self, event: MenuEvent) -> Option<MenuView> {
        let next = match event {
            MenuEvent::ToggleActivated => self.state.flipped(),
            MenuEvent::LinkActivated | MenuEvent::OutsidePointer | MenuEvent::EscapePressed => {
                MenuState::Closed
            }
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(MenuView::for_state(next))
    }

    #[must_use]
    pub const fn view(&self) -> MenuView {
        MenuView::for_state(self.state)
    }
}

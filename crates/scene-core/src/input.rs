/// Mouse button as reported by the platform, normalised to DOM numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

impl PointerButton {
    /// Map `MouseEvent.button` (0 = primary, 1 = middle, 2 = secondary).
    #[inline]
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            n => Self::Other(n.max(0) as u16),
        }
    }
}

/// Keyboard shortcuts understood by both frontends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ResetScene,
    TogglePanel,
    ToggleWalls,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::ResetScene),
        "h" | "H" => Some(KeyAction::TogglePanel),
        "w" | "W" => Some(KeyAction::ToggleWalls),
        _ => None,
    }
}

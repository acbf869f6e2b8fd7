//! Configuration editor messages

/// Configuration editor interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMessage {
    FocusNext,
    FocusPrevious,
    /// Previous candidate, or move the text cursor left
    CyclePrevious,
    /// Next candidate, or move the text cursor right
    CycleNext,
    InputChar(char),
    Backspace,
    /// Flip the collapsed flag, or move on from other fields
    Confirm,
    Close,
}

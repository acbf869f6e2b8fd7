//! Card messages

/// Card interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMessage {
    // ========== Cursor ==========
    /// Move to the previous item
    SelectPrevious,
    /// Move to the next item
    SelectNext,

    // ========== Values ==========
    /// Toggle a zone, flip a switch or apply typed number input
    Confirm,
    /// Previous option or one step down
    CyclePrevious,
    /// Next option or one step up
    CycleNext,
    /// Flip the switch under the cursor
    ToggleSwitch,
    /// Character typed into a number row
    InputChar(char),
    /// Delete the last typed character
    InputBackspace,

    // ========== Edit mode ==========
    /// Enter edit mode
    EnterEdit,
    /// Send staged values
    Submit,
    /// Drop typed input, or staged values when there is none
    Cancel,

    /// Collapse or expand the whole card
    ToggleCard,
    /// Show the zones of the next `select` entity, when the card allows it
    NextZoneEntity,
}

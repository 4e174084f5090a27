/// Number of digit slots in the entry form.
pub const SLOT_COUNT: usize = 3;

/// The three-digit entry field.
///
/// Non-digit input is silently dropped; entering a digit fills the focused
/// slot and advances focus. Submission is gated on
/// [`is_complete`](Self::is_complete).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitInput {
    slots: [Option<u8>; SLOT_COUNT],
    focus: usize,
}

impl DigitInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Option<u8>; SLOT_COUNT] {
        &self.slots
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The cast digits, available once all slots are filled.
    pub fn digits(&self) -> Option<[u8; SLOT_COUNT]> {
        let mut digits = [0u8; SLOT_COUNT];
        for (slot, digit) in self.slots.iter().zip(&mut digits) {
            *digit = (*slot)?;
        }
        Some(digits)
    }

    /// Accept one keystroke. Anything but `0-9` is ignored.
    pub fn enter(&mut self, c: char) {
        let Some(digit) = c.to_digit(10) else {
            return;
        };

        self.slots[self.focus] = Some(digit as u8);
        if self.focus + 1 < SLOT_COUNT {
            self.focus += 1;
        }
    }

    /// Clear the focused slot, or step back and clear the previous one.
    pub fn backspace(&mut self) {
        if self.slots[self.focus].is_some() {
            self.slots[self.focus] = None;
        } else if self.focus > 0 {
            self.focus -= 1;
            self.slots[self.focus] = None;
        }
    }

    pub fn focus_left(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn focus_right(&mut self) {
        self.focus = (self.focus + 1).min(SLOT_COUNT - 1);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

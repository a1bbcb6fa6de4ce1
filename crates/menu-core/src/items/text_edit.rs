//! Single-line text editing driven by next/prev/select alone, the way a
//! rotary encoder with a push button would drive it.
//!
//! While focused the item alternates between two sub-states:
//! - `Selection`: next/prev move the cursor over `[0, size]`. Selecting at
//!   position 0 commits and leaves the item; anywhere else starts editing
//!   the character left of the cursor.
//! - `Editing`: next/prev step that character through printable ASCII.
//!   Selecting returns to `Selection`.

pub const FIRST_PRINTABLE: u8 = b' ';
pub const LAST_PRINTABLE: u8 = b'~';

const FILL: u8 = b' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// Not editing; the item is at most highlighted.
    Focused,
    Selection,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditItem {
    buffer: Vec<u8>,
    position: usize,
    state: EditState,
}

impl TextEditItem {
    /// A buffer of `size` characters initialised from `value`. Longer input
    /// is truncated, shorter input is padded with spaces.
    pub fn new(value: &str, size: usize) -> Self {
        Self {
            buffer: sanitize(value, size),
            position: 0,
            state: EditState::Focused,
        }
    }

    pub fn value(&self) -> &str {
        // only printable ASCII ever lands in the buffer
        std::str::from_utf8(&self.buffer).unwrap_or_default()
    }

    /// Replace the contents while keeping the declared size.
    pub fn set_value(&mut self, value: &str) {
        self.buffer = sanitize(value, self.buffer.len());
    }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Change the declared capacity. The cursor is pulled back inside the
    /// new bounds.
    pub fn set_size(&mut self, size: usize) {
        self.buffer.resize(size, FILL);
        self.position = self.position.min(size);
    }

    /// Cursor position; 0 is the "done" slot before the first character.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn edit_state(&self) -> EditState {
        self.state
    }

    /// Select transition. Takes the current focus flag and returns the new one.
    pub(crate) fn select(&mut self, focused: bool) -> bool {
        if !focused {
            self.state = EditState::Selection;
            self.position = 1.min(self.size());
            return true;
        }
        match self.state {
            EditState::Selection if self.position == 0 => {
                self.state = EditState::Focused;
                false
            }
            EditState::Selection => {
                self.state = EditState::Editing;
                true
            }
            EditState::Editing => {
                self.state = EditState::Selection;
                true
            }
            EditState::Focused => {
                self.state = EditState::Selection;
                self.position = 1.min(self.size());
                true
            }
        }
    }

    pub(crate) fn next(&mut self) -> bool {
        match self.state {
            EditState::Selection => {
                self.position = (self.position + 1).min(self.size());
                true
            }
            EditState::Editing => {
                if let Some(byte) = self.edited_byte() {
                    *byte = next_printable(*byte);
                }
                true
            }
            EditState::Focused => false,
        }
    }

    pub(crate) fn prev(&mut self) -> bool {
        match self.state {
            EditState::Selection => {
                self.position = self.position.saturating_sub(1);
                true
            }
            EditState::Editing => {
                if let Some(byte) = self.edited_byte() {
                    *byte = prev_printable(*byte);
                }
                true
            }
            EditState::Focused => false,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.state = EditState::Focused;
        self.position = 0;
    }

    fn edited_byte(&mut self) -> Option<&mut u8> {
        let index = self.position.checked_sub(1)?;
        self.buffer.get_mut(index)
    }
}

fn sanitize(value: &str, size: usize) -> Vec<u8> {
    let mut buffer: Vec<u8> = value
        .chars()
        .take(size)
        .map(|c| {
            if c.is_ascii_graphic() || c == ' ' {
                c as u8
            } else {
                FILL
            }
        })
        .collect();
    buffer.resize(size, FILL);
    buffer
}

fn next_printable(byte: u8) -> u8 {
    (byte.clamp(FIRST_PRINTABLE, LAST_PRINTABLE) + 1).min(LAST_PRINTABLE)
}

fn prev_printable(byte: u8) -> u8 {
    byte.clamp(FIRST_PRINTABLE, LAST_PRINTABLE)
        .saturating_sub(1)
        .max(FIRST_PRINTABLE)
}

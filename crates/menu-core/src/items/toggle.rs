/// An on/off item flipped by select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    state: bool,
    on_label: String,
    off_label: String,
}

impl ToggleItem {
    pub fn new(on_label: impl Into<String>, off_label: impl Into<String>) -> Self {
        Self {
            state: false,
            on_label: on_label.into(),
            off_label: off_label.into(),
        }
    }

    pub fn with_state(mut self, state: bool) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    pub fn set_on(&mut self) {
        self.state = true;
    }

    pub fn set_off(&mut self) {
        self.state = false;
    }

    pub fn toggle(&mut self) {
        self.state = !self.state;
    }

    pub fn on_label(&self) -> &str {
        &self.on_label
    }

    pub fn off_label(&self) -> &str {
        &self.off_label
    }

    /// Label matching the current state.
    pub fn state_label(&self) -> &str {
        if self.state {
            &self.on_label
        } else {
            &self.off_label
        }
    }
}

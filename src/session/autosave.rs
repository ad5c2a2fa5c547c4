/// Decide whether a save must happen now
pub fn should_autosave(enabled: bool, pending: bool) -> bool {
    enabled && pending
}

/// Dirty flag plus the autosave switch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutosavePolicy {
    enabled: bool,
    pending: bool,
}

impl AutosavePolicy {
    /// Autosave off, nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether autosave is switched on
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether there are unsaved edits
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Switch autosave on or off
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Record an unsaved edit
    pub fn mark_dirty(&mut self) {
        self.pending = true;
    }

    /// Record that storage matches the document
    pub fn mark_clean(&mut self) {
        self.pending = false;
    }

    /// Whether a save must happen now
    pub fn should_save(&self) -> bool {
        should_autosave(self.enabled, self.pending)
    }
}

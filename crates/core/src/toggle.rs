//! Toggle capability: enabled/disabled state.

use serde::{Deserialize, Serialize};

/// On/off switch embedded by toggleable entities.
///
/// Starts **enabled**: a freshly created resource should show up in listings
/// without an extra activation step. Disabling is the explicit act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    enabled: bool,
}

impl Toggle {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Flip to the opposite state.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_enabled() {
        assert!(Toggle::default().is_enabled());
    }

    #[test]
    fn disable_then_enable_round_trips() {
        let mut toggle = Toggle::default();
        toggle.disable();
        assert!(!toggle.is_enabled());
        toggle.enable();
        assert!(toggle.is_enabled());
    }

    #[test]
    fn toggling_twice_restores_the_state() {
        let mut toggle = Toggle::new(false);
        toggle.toggle();
        assert!(toggle.is_enabled());
        toggle.toggle();
        assert!(!toggle.is_enabled());
    }
}

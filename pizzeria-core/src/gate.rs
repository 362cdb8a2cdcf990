//! Admin gate
//!
//! A process-wide visibility flag for the mutation surface, flipped by a
//! reserved key chord in the host and force-closed by an explicit close
//! action. This is a UI affordance only: there is no authentication
//! behind it, and anything it exposes is as trustworthy as any other
//! unauthenticated client input.

use serde::{Deserialize, Serialize};

/// Behavior knobs for the admin gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminGateConfig {
    /// Whether triggers generated by key auto-repeat flip the gate.
    ///
    /// When `true`, holding the chord keeps flipping the gate on every
    /// repeated keydown. Defaults to `false`: only the initial press
    /// counts.
    pub honor_key_repeat: bool,
}

impl Default for AdminGateConfig {
    fn default() -> Self {
        Self {
            honor_key_repeat: false,
        }
    }
}

/// Visibility flag for admin mutations, independent of navigation state
#[derive(Debug, Default)]
pub struct AdminGate {
    open: bool,
    config: AdminGateConfig,
}

impl AdminGate {
    pub fn new(config: AdminGateConfig) -> Self {
        Self {
            open: false,
            config,
        }
    }

    /// Flip the flag unconditionally
    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "admin gate toggled");
    }

    /// React to one occurrence of the reserved trigger.
    ///
    /// `is_auto_repeat` marks triggers the host generated from key
    /// auto-repeat; whether those flip the gate is decided by
    /// [`AdminGateConfig::honor_key_repeat`].
    pub fn handle_trigger(&mut self, is_auto_repeat: bool) {
        if is_auto_repeat && !self.config.honor_key_repeat {
            return;
        }
        self.toggle();
    }

    /// Force the flag closed; idempotent
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pure read
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_returns_to_closed() {
        let mut gate = AdminGate::default();
        gate.toggle();
        assert!(gate.is_open());
        gate.toggle();
        assert!(!gate.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut gate = AdminGate::default();
        gate.toggle();
        gate.toggle();
        gate.toggle();
        gate.close();
        assert!(!gate.is_open());
        gate.close();
        assert!(!gate.is_open());
    }

    #[test]
    fn test_auto_repeat_ignored_by_default() {
        let mut gate = AdminGate::default();
        gate.handle_trigger(false);
        assert!(gate.is_open());
        // Held chord: the host keeps delivering repeat triggers
        gate.handle_trigger(true);
        gate.handle_trigger(true);
        assert!(gate.is_open());
    }

    #[test]
    fn test_auto_repeat_honored_when_configured() {
        let mut gate = AdminGate::new(AdminGateConfig {
            honor_key_repeat: true,
        });
        gate.handle_trigger(false);
        gate.handle_trigger(true);
        assert!(!gate.is_open());
    }
}

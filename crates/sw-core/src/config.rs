//! Configuration for a traversal session.

/// Flags selecting between the literal legacy behaviors and their
/// corrected variants. Everything defaults to the legacy side.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Grant items with [`crate::Player::accumulate_item`] instead of
    /// the legacy replace-on-add [`crate::Player::add_item`].
    pub accumulate_items: bool,
    /// Honor a requested starting health instead of pinning it to
    /// 100. Only consulted by callers constructing the player; the
    /// session itself never adjusts health.
    pub honor_requested_health: bool,
}

impl SessionConfig {
    /// Toggle corrected item accumulation.
    pub fn with_accumulate_items(mut self, accumulate: bool) -> Self {
        self.accumulate_items = accumulate;
        self
    }

    /// Toggle honoring a requested starting health.
    pub fn with_honor_requested_health(mut self, honor: bool) -> Self {
        self.honor_requested_health = honor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_legacy_behavior() {
        let cfg = SessionConfig::default();
        assert!(!cfg.accumulate_items);
        assert!(!cfg.honor_requested_health);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_accumulate_items(true)
            .with_honor_requested_health(true);
        assert!(cfg.accumulate_items);
        assert!(cfg.honor_requested_health);
    }
}

use embassy_time::Duration;

use crate::effect::EffectId;

/// Number of pixels on the demo strip
pub const DEFAULT_LED_COUNT: usize = 25;

/// Base blink period; effects derive their frame delay from it
pub const DEFAULT_BASE_PERIOD: Duration = Duration::from_millis(1000);

/// Configuration for the effects demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Effect played on an addressable strip
    pub effect: EffectId,
    /// Base period each effect divides into its frame delay
    pub base_period: Duration,
}

impl DemoConfig {
    pub const DEFAULT: Self = Self {
        effect: EffectId::DEFAULT,
        base_period: DEFAULT_BASE_PERIOD,
    };

    /// Build a configuration from a numeric mode
    ///
    /// Unknown modes keep the default effect.
    pub fn from_raw_mode(mode: u8) -> Self {
        Self::DEFAULT.with_effect(EffectId::from_raw(mode).unwrap_or(EffectId::DEFAULT))
    }

    #[must_use]
    pub const fn with_effect(mut self, effect: EffectId) -> Self {
        self.effect = effect;
        self
    }

    #[must_use]
    pub const fn with_base_period(mut self, period: Duration) -> Self {
        self.base_period = period;
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

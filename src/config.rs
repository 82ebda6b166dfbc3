//! Engine-wide settings and their validation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sequencing::grids::STEPS_PER_PATTERN;

/// Nominal tick rate of the host, in Hz.
pub const DEFAULT_SAMPLE_RATE: f32 = 16_667.0;

/// Terrain evaluation and crossfade settings.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainConfig {
    /// Output wraps spent crossfading to a new geometry.
    pub fade_cycles: u32,
    /// Ticks between two evaluation steps of a new geometry.
    pub sub_sample_count: u32,
    /// Sweep phase advanced per evaluation step.
    pub sweep_increment: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            fade_cycles: 1,
            sub_sample_count: 10,
            sweep_increment: 0.01,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    /// Steps before the pattern repeats.
    pub length: u8,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            length: STEPS_PER_PATTERN as u8,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub sample_rate: f32,
    pub terrain: TerrainConfig,
    pub pattern: PatternConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            terrain: TerrainConfig::default(),
            pattern: PatternConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Check the values the generators treat as preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(err) = &result {
            tracing::warn!(%err, "rejected engine config");
        } else {
            tracing::debug!(sample_rate = self.sample_rate, "engine config accepted");
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(ConfigError::InvalidSampleRate {
                value: self.sample_rate,
            });
        }

        if self.terrain.fade_cycles == 0 {
            return Err(ConfigError::ZeroFadeCycles);
        }

        if self.terrain.sub_sample_count == 0 {
            return Err(ConfigError::ZeroSubSampleCount);
        }

        let step = self.terrain.sweep_increment;
        if !(step > 0.0 && step <= 1.0) {
            return Err(ConfigError::InvalidSweepIncrement { value: step });
        }

        let length = self.pattern.length as usize;
        if length == 0 || length > STEPS_PER_PATTERN {
            return Err(ConfigError::InvalidPatternLength {
                value: length,
                max: STEPS_PER_PATTERN,
            });
        }

        Ok(())
    }
}

/// Errors reported by [`EngineConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Sample rate is not a positive, finite number
    InvalidSampleRate { value: f32 },
    /// A crossfade needs at least one output cycle
    ZeroFadeCycles,
    /// Evaluation would never advance
    ZeroSubSampleCount,
    /// Sweep step outside (0, 1]
    InvalidSweepIncrement { value: f32 },
    /// Pattern length outside 1..=max
    InvalidPatternLength { value: usize, max: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidSampleRate { value } => {
                write!(f, "Sample rate must be positive and finite, got {}", value)
            }
            ConfigError::ZeroFadeCycles => {
                write!(f, "Terrain fade must last at least one cycle")
            }
            ConfigError::ZeroSubSampleCount => {
                write!(f, "Terrain sub-sample count must be at least 1")
            }
            ConfigError::InvalidSweepIncrement { value } => {
                write!(f, "Terrain sweep increment must be in (0, 1], got {}", value)
            }
            ConfigError::InvalidPatternLength { value, max } => {
                write!(f, "Pattern length must be between 1 and {}, got {}", max, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.sample_rate, DEFAULT_SAMPLE_RATE);
        assert_eq!(config.terrain.sub_sample_count, 10);
        assert_eq!(config.pattern.length, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_sample_rate() {
        let config = EngineConfig {
            sample_rate: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSampleRate { value: 0.0 })
        );

        let config = EngineConfig {
            sample_rate: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_terrain_and_pattern() {
        let mut config = EngineConfig::default();
        config.terrain.fade_cycles = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroFadeCycles));

        let mut config = EngineConfig::default();
        config.terrain.sweep_increment = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSweepIncrement { .. })
        ));

        let mut config = EngineConfig::default();
        config.pattern.length = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPatternLength { value: 0, max: 32 })
        );
    }

    #[test]
    fn error_messages_name_the_value() {
        let err = ConfigError::InvalidPatternLength { value: 40, max: 32 };
        assert_eq!(err.to_string(), "Pattern length must be between 1 and 32, got 40");
    }
}

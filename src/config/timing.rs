use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 时间步配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// 固定帧步长（秒）
    pub fixed_delta: f32,

    /// 单帧最大步长（秒），防止卡顿后粒子跳跃
    pub max_delta: f32,
}

impl_default!(TimingConfig {
    fixed_delta: 1.0 / 60.0,
    max_delta: 0.25,
});

impl TimingConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.fixed_delta.is_finite() || self.fixed_delta <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "Invalid fixed delta: {}",
                self.fixed_delta
            )));
        }
        if self.max_delta.is_nan() || self.max_delta < self.fixed_delta {
            return Err(ConfigError::ValidationError(format!(
                "Max delta {} is smaller than fixed delta {}",
                self.max_delta, self.fixed_delta
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing_is_valid() {
        assert!(TimingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_timing() {
        let zero = TimingConfig {
            fixed_delta: 0.0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let inverted = TimingConfig {
            fixed_delta: 0.5,
            max_delta: 0.1,
        };
        assert!(inverted.validate().is_err());
    }
}

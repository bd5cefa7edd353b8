//! 统一错误处理模块
//!
//! 动画与粒子的核心操作都是全函数（没有错误返回），
//! 错误只出现在外部数据进入系统的边界上：粒子配置校验与配置文件加载。
//!
//! - `ParticleDataError`: 粒子配置数据不合法
//! - `config::ConfigError`: 配置文件读取/解析/校验失败（见 `config` 模块）

use thiserror::Error;

/// 粒子配置数据错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParticleDataError {
    #[error("Non-finite value in channel '{channel}' field '{field}'")]
    NonFinite {
        channel: &'static str,
        field: &'static str,
    },

    #[error("Life span can never be positive: value {value}, variance max {variance_max}")]
    NonPositiveLifeSpan { value: f32, variance_max: f32 },
}

pub type ParticleDataResult<T> = Result<T, ParticleDataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParticleDataError::NonFinite {
            channel: "velocity_x",
            field: "target",
        };
        assert_eq!(
            err.to_string(),
            "Non-finite value in channel 'velocity_x' field 'target'"
        );

        let err = ParticleDataError::NonPositiveLifeSpan {
            value: -1.0,
            variance_max: 0.5,
        };
        assert!(err.to_string().contains("-1"));
    }
}

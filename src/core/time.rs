//! 帧时钟
//!
//! 每帧由外部推进一次，同一帧内所有 Tweener 与 Particle 读取同一个 delta。

use crate::config::TimingConfig;

/// 规整单帧 delta：非有限值与负值视为 0
pub fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() && delta > 0.0 {
        delta
    } else {
        0.0
    }
}

/// 帧时钟（delta 时间源）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    delta: f32,
    fixed_delta: f32,
    max_delta: f32,
    total_time: f64,
    frame_count: u64,
}

impl FrameClock {
    /// 以固定步长创建，最大步长不限制
    pub fn fixed(delta: f32) -> Self {
        Self {
            delta: 0.0,
            fixed_delta: delta,
            max_delta: f32::INFINITY,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// 从时间配置创建
    ///
    /// 非有限或负的 `max_delta` 视为不限制。
    pub fn from_config(config: &TimingConfig) -> Self {
        let max_delta = if config.max_delta.is_nan() || config.max_delta < 0.0 {
            tracing::warn!(
                target: "particle",
                "Ignoring invalid max_delta {}",
                config.max_delta
            );
            f32::INFINITY
        } else {
            config.max_delta
        };
        Self {
            max_delta,
            ..Self::fixed(config.fixed_delta)
        }
    }

    /// 推进一帧
    ///
    /// delta 被限制在 `[0, max_delta]`，非有限值视为 0。
    pub fn advance(&mut self, delta: f32) -> f32 {
        let delta = sanitize_delta(delta).min(self.max_delta);

        self.delta = delta;
        self.total_time += f64::from(delta);
        self.frame_count += 1;
        delta
    }

    /// 以配置的固定步长推进一帧
    pub fn advance_fixed(&mut self) -> f32 {
        self.advance(self.fixed_delta)
    }

    /// 当前帧的 delta
    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn fixed_delta(&self) -> f32 {
        self.fixed_delta
    }

    /// 累计模拟时间
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::from_config(&TimingConfig::default())
    }
}

//! 粒子配置数据
//!
//! 由外部配置层提供，粒子只读。每个通道是一个四元组
//! `(value, target, variance_min, variance_max)`：
//! 初始值、目标值、方差下界、方差上界。

use super::channel::ParticleChannel;
use crate::animation::{CurveFamily, EasingFunction};
use crate::core::error::{ParticleDataError, ParticleDataResult};
use serde::{Deserialize, Serialize};

/// 单通道配置
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelRange {
    /// 初始值
    pub value: f32,
    /// 目标值
    #[serde(default)]
    pub target: f32,
    /// 方差下界
    #[serde(default)]
    pub variance_min: f32,
    /// 方差上界
    #[serde(default)]
    pub variance_max: f32,
}

impl ChannelRange {
    pub const fn new(value: f32, target: f32, variance_min: f32, variance_max: f32) -> Self {
        Self {
            value,
            target,
            variance_min,
            variance_max,
        }
    }

    /// 无方差、初始值与目标值相同
    pub const fn constant(value: f32) -> Self {
        Self::new(value, value, 0.0, 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
            && self.target.is_finite()
            && self.variance_min.is_finite()
            && self.variance_max.is_finite()
    }

    fn first_non_finite_field(&self) -> Option<&'static str> {
        [
            ("value", self.value),
            ("target", self.target),
            ("variance_min", self.variance_min),
            ("variance_max", self.variance_max),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
    }
}

impl From<[f32; 4]> for ChannelRange {
    fn from(values: [f32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}

impl From<ChannelRange> for [f32; 4] {
    fn from(range: ChannelRange) -> Self {
        [
            range.value,
            range.target,
            range.variance_min,
            range.variance_max,
        ]
    }
}

fn default_velocity_easing() -> EasingFunction {
    EasingFunction::ease_out(CurveFamily::Quadratic)
}

fn default_colour_easing() -> EasingFunction {
    EasingFunction::LINEAR
}

/// 粒子配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleData {
    /// 生命周期（只使用 value 与方差）
    pub life_span: ChannelRange,
    #[serde(default)]
    pub velocity_x: ChannelRange,
    #[serde(default)]
    pub velocity_y: ChannelRange,
    #[serde(default = "opaque_channel")]
    pub colour_r: ChannelRange,
    #[serde(default = "opaque_channel")]
    pub colour_g: ChannelRange,
    #[serde(default = "opaque_channel")]
    pub colour_b: ChannelRange,
    #[serde(default = "opaque_channel")]
    pub colour_a: ChannelRange,
    /// 速度通道的缓动
    #[serde(default = "default_velocity_easing")]
    pub velocity_easing: EasingFunction,
    /// 颜色通道的缓动
    #[serde(default = "default_colour_easing")]
    pub colour_easing: EasingFunction,
}

fn opaque_channel() -> ChannelRange {
    ChannelRange::constant(255.0)
}

impl Default for ParticleData {
    fn default() -> Self {
        Self {
            life_span: ChannelRange::constant(1.0),
            velocity_x: ChannelRange::default(),
            velocity_y: ChannelRange::default(),
            colour_r: opaque_channel(),
            colour_g: opaque_channel(),
            colour_b: opaque_channel(),
            colour_a: opaque_channel(),
            velocity_easing: default_velocity_easing(),
            colour_easing: default_colour_easing(),
        }
    }
}

impl ParticleData {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置生命周期及其方差
    pub fn with_life_span(mut self, value: f32, variance_min: f32, variance_max: f32) -> Self {
        self.life_span = ChannelRange::new(value, value, variance_min, variance_max);
        self
    }

    /// 设置单个通道
    pub fn with_channel(mut self, channel: ParticleChannel, range: impl Into<ChannelRange>) -> Self {
        *self.channel_mut(channel) = range.into();
        self
    }

    /// 设置速度
    pub fn with_velocity(mut self, x: impl Into<ChannelRange>, y: impl Into<ChannelRange>) -> Self {
        self.velocity_x = x.into();
        self.velocity_y = y.into();
        self
    }

    /// 设置 RGBA 四个颜色通道
    pub fn with_colour(mut self, channels: [ChannelRange; 4]) -> Self {
        let [r, g, b, a] = channels;
        self.colour_r = r;
        self.colour_g = g;
        self.colour_b = b;
        self.colour_a = a;
        self
    }

    pub fn with_velocity_easing(mut self, easing: EasingFunction) -> Self {
        self.velocity_easing = easing;
        self
    }

    pub fn with_colour_easing(mut self, easing: EasingFunction) -> Self {
        self.colour_easing = easing;
        self
    }

    pub fn channel(&self, channel: ParticleChannel) -> &ChannelRange {
        match channel {
            ParticleChannel::VelocityX => &self.velocity_x,
            ParticleChannel::VelocityY => &self.velocity_y,
            ParticleChannel::ColourR => &self.colour_r,
            ParticleChannel::ColourG => &self.colour_g,
            ParticleChannel::ColourB => &self.colour_b,
            ParticleChannel::ColourA => &self.colour_a,
        }
    }

    pub fn channel_mut(&mut self, channel: ParticleChannel) -> &mut ChannelRange {
        match channel {
            ParticleChannel::VelocityX => &mut self.velocity_x,
            ParticleChannel::VelocityY => &mut self.velocity_y,
            ParticleChannel::ColourR => &mut self.colour_r,
            ParticleChannel::ColourG => &mut self.colour_g,
            ParticleChannel::ColourB => &mut self.colour_b,
            ParticleChannel::ColourA => &mut self.colour_a,
        }
    }

    /// 通道使用的缓动函数
    pub fn easing_for(&self, channel: ParticleChannel) -> EasingFunction {
        if channel.is_velocity() {
            self.velocity_easing
        } else {
            self.colour_easing
        }
    }

    /// 校验配置
    ///
    /// 非有限值与永远无法为正的生命周期是错误；
    /// 方差上下界颠倒只记录警告，抽样时会交换边界。
    pub fn validate(&self) -> ParticleDataResult<()> {
        if let Some(field) = self.life_span.first_non_finite_field() {
            return Err(ParticleDataError::NonFinite {
                channel: "life_span",
                field,
            });
        }

        for channel in ParticleChannel::ALL {
            let range = self.channel(channel);
            if let Some(field) = range.first_non_finite_field() {
                return Err(ParticleDataError::NonFinite {
                    channel: channel.name(),
                    field,
                });
            }
            if range.variance_min > range.variance_max {
                tracing::warn!(
                    target: "particle",
                    "Channel {} has inverted variance [{}, {}]",
                    channel.name(),
                    range.variance_min,
                    range.variance_max
                );
            }
        }

        let variance_max = self.life_span.variance_min.max(self.life_span.variance_max);
        if self.life_span.value + variance_max <= 0.0 {
            return Err(ParticleDataError::NonPositiveLifeSpan {
                value: self.life_span.value,
                variance_max,
            });
        }

        Ok(())
    }
}

//! 单个粒子的生命周期
//!
//! 粒子由六个补间器驱动（两个速度通道、四个颜色通道），
//! 每帧推进补间器并把速度积分到位置上。
//!
//! ## 状态
//!
//! ```text
//!   new() ──► ALIVE ──(life_time >= life_span)──► EXPIRED
//!               ▲                                    │
//!               └──────────── emit(x, y) ◄───────────┘
//! ```
//!
//! EXPIRED 状态下 `update` 不做任何事，粒子原地冻结；
//! 回收与复用由外部管理者通过 `emit` 决定。

use super::channel::ParticleChannel;
use super::data::ParticleData;
use crate::animation::Tweener;
use crate::core::random::RandomSource;
use crate::core::time::sanitize_delta;
use glam::Vec2;
use std::sync::Arc;

/// 颜色通道的显式上下界
pub const COLOUR_MIN: f32 = 0.0;
pub const COLOUR_MAX: f32 = 255.0;

/// 粒子状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleState {
    Alive,
    Expired,
}

/// 粒子
#[derive(Debug)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    colour: [f32; 4],
    life_time: f32,
    life_span: f32,
    tweeners: [Tweener; ParticleChannel::COUNT],
    data: Arc<ParticleData>,
}

impl Particle {
    /// 从配置创建粒子
    ///
    /// 构造顺序固定：先抽取六个通道的目标值，再抽取生命周期，
    /// 最后写入初始值、时长和缓动。目标值只读取配置，不依赖初始值。
    pub fn new<R>(data: impl Into<Arc<ParticleData>>, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let data = data.into();
        let mut particle = Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            colour: [0.0; 4],
            life_time: 0.0,
            life_span: 0.0,
            tweeners: Default::default(),
            data: Arc::clone(&data),
        };

        particle.calculate_targets(rng);

        let life = data.life_span;
        particle.life_span = life.value + rng.random_range(life.variance_min, life.variance_max);

        for channel in ParticleChannel::ALL {
            let tweener = &mut particle.tweeners[channel.index()];
            tweener.set_initial(data.channel(channel).value);
            tweener.set_duration(particle.life_span);
            tweener.set_easing(data.easing_for(channel));
            tweener.reset();
        }
        particle.sync_from_tweeners();

        if particle.life_span <= 0.0 {
            tracing::warn!(
                target: "particle",
                "Particle created with non-positive life span {}",
                particle.life_span
            );
        }
        tracing::debug!(
            target: "particle",
            "Particle created: life_span={}, velocity={:?}, colour={:?}",
            particle.life_span,
            particle.velocity,
            particle.colour
        );

        particle
    }

    /// 推进一帧
    pub fn update(&mut self, delta: f32) {
        if !self.is_alive() {
            return;
        }

        let delta = sanitize_delta(delta);
        self.life_time += delta;

        for channel in ParticleChannel::COLOUR {
            self.tweeners[channel.index()].update(delta);
        }
        for channel in ParticleChannel::VELOCITY {
            self.tweeners[channel.index()].update(delta);
        }
        self.sync_from_tweeners();

        self.position += self.velocity * delta;

        if !self.is_alive() {
            tracing::trace!(
                target: "particle",
                "Particle expired at ({}, {})",
                self.position.x,
                self.position.y
            );
        }
    }

    /// 在 `(x, y)` 重生
    ///
    /// 生命时间归零，补间器回到初始值，并重新抽取全部目标值。
    /// 生命周期本身保持不变。
    pub fn emit<R>(&mut self, x: f32, y: f32, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        self.life_time = 0.0;
        self.position = Vec2::new(x, y);

        for tweener in self.tweeners.iter_mut() {
            tweener.reset();
        }
        self.sync_from_tweeners();

        self.calculate_targets(rng);

        tracing::trace!(target: "particle", "Particle emitted at ({}, {})", x, y);
    }

    /// 重新抽取六个通道的目标值：`target + random_range(variance_min, variance_max)`
    pub fn calculate_targets<R>(&mut self, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        for channel in ParticleChannel::ALL {
            let range = self.data.channel(channel);
            let target = range.target + rng.random_range(range.variance_min, range.variance_max);
            self.tweeners[channel.index()].set_target(target);
        }
    }

    fn sync_from_tweeners(&mut self) {
        self.velocity = Vec2::new(
            self.tweeners[ParticleChannel::VelocityX.index()].value(),
            self.tweeners[ParticleChannel::VelocityY.index()].value(),
        );
        for channel in ParticleChannel::COLOUR {
            if let Some(i) = channel.colour_index() {
                self.colour[i] = self.tweeners[channel.index()].value();
            }
        }
    }

    /// 只修改生命周期，补间器时长不变
    pub fn set_life_span(&mut self, life_span: f32) {
        self.life_span = life_span;
    }

    /// 覆盖当前颜色，每个通道限制在 `[0, 255]`
    ///
    /// 只持续到下一次 `update`，之后颜色重新由补间器写入。
    pub fn set_colour_clamped(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.colour = [r, g, b, a].map(|c| c.clamp(COLOUR_MIN, COLOUR_MAX));
    }

    /// 覆盖当前颜色，不做限制
    pub fn set_colour_raw(&mut self, colour: [f32; 4]) {
        self.colour = colour;
    }

    pub fn is_alive(&self) -> bool {
        self.life_time < self.life_span
    }

    pub fn state(&self) -> ParticleState {
        if self.is_alive() {
            ParticleState::Alive
        } else {
            ParticleState::Expired
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn position_x(&self) -> f32 {
        self.position.x
    }

    pub fn position_y(&self) -> f32 {
        self.position.y
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn velocity_x(&self) -> f32 {
        self.velocity.x
    }

    pub fn velocity_y(&self) -> f32 {
        self.velocity.y
    }

    pub fn life_time(&self) -> f32 {
        self.life_time
    }

    pub fn life_span(&self) -> f32 {
        self.life_span
    }

    pub fn colour(&self) -> [f32; 4] {
        self.colour
    }

    pub fn data(&self) -> &ParticleData {
        &self.data
    }

    pub fn tweener(&self, channel: ParticleChannel) -> &Tweener {
        &self.tweeners[channel.index()]
    }

    /// 可变访问补间器，例如挂接更新回调
    pub fn tweener_mut(&mut self, channel: ParticleChannel) -> &mut Tweener {
        &mut self.tweeners[channel.index()]
    }
}

//! # Particle Tween
//!
//! 基于时间的标量补间引擎，以及构建在其上的 2D 粒子生命周期模型。
//!
//! ## Features
//!
//! - **Easing**: 多种曲线族（线性、二次、三次……弹跳）与 in/out/in-out 方向
//! - **Tweening**: 按帧 delta 推进的标量补间器，支持更新回调与完成信号
//! - **Particles**: 六通道补间驱动的粒子，带随机方差的目标值与可复用的 `emit`
//! - **Config**: TOML/JSON 配置、环境变量覆盖与校验
//!
//! ## Architecture Design
//!
//! 帧 delta 与随机数源都作为参数显式传入，而不是进程级单例：
//! - **FrameClock**: 每帧由外部推进一次，提供本帧 delta
//! - **RandomSource**: 由调用方持有并传给 `Particle::new` / `emit`
//!
//! ### Example
//!
//! ```rust
//! use particle_tween::config::SimulationConfig;
//! use particle_tween::core::FrameClock;
//! use particle_tween::particles::Particle;
//!
//! let config = SimulationConfig::default();
//! let mut rng = config.random.build_rng();
//! let mut clock = FrameClock::from_config(&config.timing);
//!
//! let mut particle = Particle::new(config.particle.clone(), &mut rng);
//! particle.emit(0.0, 0.0, &mut rng);
//! while particle.is_alive() {
//!     let delta = clock.advance_fixed();
//!     particle.update(delta);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: 错误、随机数源、帧时钟与日志
//! - [`animation`]: 缓动函数与补间器
//! - [`particles`]: 粒子配置与生命周期
//! - [`config`]: 配置系统

/// Core infrastructure: errors, random source, frame clock and logging
pub mod core;
/// Easing functions and scalar tweeners
pub mod animation;
/// Single particle lifecycle driven by tweeners
pub mod particles;
/// Configuration system
pub mod config;

pub use self::animation::{CurveFamily, EasingDirection, EasingFunction, Tweener};
pub use self::core::{FrameClock, RandomSource, SimulationRng};
pub use self::particles::{Particle, ParticleChannel, ParticleData};

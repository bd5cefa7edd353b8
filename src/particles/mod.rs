//! 粒子模块
//!
//! 单个粒子的生命周期模型：由配置派生带随机方差的目标值，
//! 每帧推进速度与颜色补间器并积分位置。
//!
//! 批量管理（对象池、发射速率等）由调用方负责，这里只描述一个粒子。
//!
//! ## 使用示例
//!
//! ```rust
//! use particle_tween::core::SimulationRng;
//! use particle_tween::particles::{Particle, ParticleData};
//!
//! let data = ParticleData::new()
//!     .with_life_span(2.0, 0.0, 0.5)
//!     .with_velocity([0.0, 40.0, -5.0, 5.0], [-20.0, 0.0, 0.0, 0.0]);
//!
//! let mut rng = SimulationRng::seeded(7);
//! let mut particle = Particle::new(data, &mut rng);
//! particle.emit(100.0, 100.0, &mut rng);
//!
//! while particle.is_alive() {
//!     particle.update(1.0 / 60.0);
//! }
//! assert!(particle.position_x() > 100.0);
//! ```

pub mod channel;
pub mod data;
pub mod particle;

pub use channel::ParticleChannel;
pub use data::{ChannelRange, ParticleData};
pub use particle::{Particle, ParticleState, COLOUR_MAX, COLOUR_MIN};

//! 核心模块
//!
//! 动画与粒子共用的基础设施：
//! - `error` - 错误类型定义
//! - `random` - 随机数源
//! - `time` - 帧时钟
//! - `logging` - 日志初始化

pub mod error;
pub mod logging;
pub mod random;
pub mod time;
#[macro_use]
pub mod macros;

pub use error::{ParticleDataError, ParticleDataResult};
pub use logging::init_logging;
pub use random::{RandomSource, SimulationRng};
pub use time::{sanitize_delta, FrameClock};

//! 补间动画模块
//!
//! 提供缓动函数和基于帧 delta 推进的标量补间器。
//!
//! ## 使用示例
//!
//! ```rust
//! use particle_tween::animation::{CurveFamily, EasingFunction, Tweener};
//!
//! let mut tween = Tweener::new(0.0, 10.0, 1.0, EasingFunction::LINEAR);
//! tween.update(0.5);
//! assert!((tween.value() - 5.0).abs() < 1e-6);
//!
//! let out_quad = EasingFunction::ease_out(CurveFamily::Quadratic);
//! assert!(out_quad.ease(0.5) > 0.5);
//! ```

pub mod easing;
pub mod tweener;

pub use easing::{CurveFamily, EasingDirection, EasingFunction, ParseEasingError};
pub use tweener::{CompletionSignal, FinishedFunc, Tweener, UpdateFunc};

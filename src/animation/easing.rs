//! 缓动函数
//!
//! `EasingFunction` 由曲线族（`CurveFamily`）和方向（`EasingDirection`）组成，
//! 是一个纯值类型：相同输入永远得到相同输出，对所有组合都有
//! `ease(0) == 0` 与 `ease(1) == 1`。
//!
//! 每个曲线族只定义 "in" 形式的基础曲线 `base(t)`，方向在其上变换：
//! - `In`:    `base(t)`
//! - `Out`:   `1 - base(1 - t)`
//! - `InOut`: 前半段 `base(2t) / 2`，后半段 `1 - base(2 - 2t) / 2`

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

const BACK_C1: f32 = 1.70158;
const BACK_C3: f32 = BACK_C1 + 1.0;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;
const BOUNCE_N1: f32 = 7.5625;
const BOUNCE_D1: f32 = 2.75;

/// 曲线族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveFamily {
    /// 线性
    #[default]
    Linear,
    /// 二次
    Quadratic,
    /// 三次
    Cubic,
    /// 四次
    Quartic,
    /// 五次
    Quintic,
    /// 正弦
    Sine,
    /// 圆弧
    Circular,
    /// 指数
    Exponential,
    /// 回退（会短暂越过边界）
    Back,
    /// 弹性
    Elastic,
    /// 弹跳
    Bounce,
}

impl CurveFamily {
    pub const ALL: [CurveFamily; 11] = [
        CurveFamily::Linear,
        CurveFamily::Quadratic,
        CurveFamily::Cubic,
        CurveFamily::Quartic,
        CurveFamily::Quintic,
        CurveFamily::Sine,
        CurveFamily::Circular,
        CurveFamily::Exponential,
        CurveFamily::Back,
        CurveFamily::Elastic,
        CurveFamily::Bounce,
    ];

    /// 基础 "in" 曲线
    fn base(self, t: f32) -> f32 {
        match self {
            CurveFamily::Linear => t,
            CurveFamily::Quadratic => t * t,
            CurveFamily::Cubic => t * t * t,
            CurveFamily::Quartic => t.powi(4),
            CurveFamily::Quintic => t.powi(5),
            CurveFamily::Sine => 1.0 - (t * PI / 2.0).cos(),
            CurveFamily::Circular => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            CurveFamily::Exponential => {
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * t - 10.0)
                }
            }
            CurveFamily::Back => BACK_C3 * t * t * t - BACK_C1 * t * t,
            CurveFamily::Elastic => {
                if t <= 0.0 || t >= 1.0 {
                    t
                } else {
                    -(2.0_f32.powf(10.0 * t - 10.0)) * ((10.0 * t - 10.75) * ELASTIC_C4).sin()
                }
            }
            CurveFamily::Bounce => 1.0 - bounce_out(1.0 - t),
        }
    }

    fn name(self) -> &'static str {
        match self {
            CurveFamily::Linear => "linear",
            CurveFamily::Quadratic => "quadratic",
            CurveFamily::Cubic => "cubic",
            CurveFamily::Quartic => "quartic",
            CurveFamily::Quintic => "quintic",
            CurveFamily::Sine => "sine",
            CurveFamily::Circular => "circular",
            CurveFamily::Exponential => "exponential",
            CurveFamily::Back => "back",
            CurveFamily::Elastic => "elastic",
            CurveFamily::Bounce => "bounce",
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let t = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let t = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}

/// 缓动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingDirection {
    /// 慢起
    #[default]
    In,
    /// 慢停
    Out,
    /// 两端慢
    InOut,
}

impl EasingDirection {
    pub const ALL: [EasingDirection; 3] = [
        EasingDirection::In,
        EasingDirection::Out,
        EasingDirection::InOut,
    ];
}

/// 缓动函数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EasingFunction {
    pub family: CurveFamily,
    #[serde(default)]
    pub direction: EasingDirection,
}

impl EasingFunction {
    pub const LINEAR: EasingFunction = EasingFunction::new(CurveFamily::Linear, EasingDirection::In);

    pub const fn new(family: CurveFamily, direction: EasingDirection) -> Self {
        Self { family, direction }
    }

    pub const fn ease_in(family: CurveFamily) -> Self {
        Self::new(family, EasingDirection::In)
    }

    pub const fn ease_out(family: CurveFamily) -> Self {
        Self::new(family, EasingDirection::Out)
    }

    pub const fn ease_in_out(family: CurveFamily) -> Self {
        Self::new(family, EasingDirection::InOut)
    }

    /// 将归一化进度映射为缓动后的进度
    ///
    /// 输入被限制到 `[0, 1]`，NaN 视为 0。
    pub fn ease(&self, progress: f32) -> f32 {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        // 端点精确，避免 sine/back 等曲线的浮点误差
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }

        let family = self.family;
        match self.direction {
            EasingDirection::In => family.base(t),
            EasingDirection::Out => 1.0 - family.base(1.0 - t),
            EasingDirection::InOut => {
                if t < 0.5 {
                    family.base(2.0 * t) / 2.0
                } else {
                    1.0 - family.base(2.0 - 2.0 * t) / 2.0
                }
            }
        }
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.family, self.direction) {
            (CurveFamily::Linear, EasingDirection::In) => write!(f, "linear"),
            (family, EasingDirection::In) => write!(f, "{}-in", family.name()),
            (family, EasingDirection::Out) => write!(f, "{}-out", family.name()),
            (family, EasingDirection::InOut) => write!(f, "{}-in-out", family.name()),
        }
    }
}

/// 缓动函数解析错误
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown easing function: {0}")]
pub struct ParseEasingError(pub String);

impl FromStr for EasingFunction {
    type Err = ParseEasingError;

    /// 支持 `"linear"`、`"quadratic-out"`、`"cubic-in-out"` 等形式，
    /// 以及 `"ease-in"`/`"ease-out"`/`"ease-in-out"`（二次曲线）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase().replace('_', "-");

        let (family_name, direction) = if let Some(rest) = lower.strip_suffix("-in-out") {
            (rest, EasingDirection::InOut)
        } else if let Some(rest) = lower.strip_suffix("-out") {
            (rest, EasingDirection::Out)
        } else if let Some(rest) = lower.strip_suffix("-in") {
            (rest, EasingDirection::In)
        } else {
            (lower.as_str(), EasingDirection::In)
        };

        let family = match family_name {
            "linear" => CurveFamily::Linear,
            "ease" | "quad" | "quadratic" => CurveFamily::Quadratic,
            "cubic" => CurveFamily::Cubic,
            "quart" | "quartic" => CurveFamily::Quartic,
            "quint" | "quintic" => CurveFamily::Quintic,
            "sine" => CurveFamily::Sine,
            "circ" | "circular" => CurveFamily::Circular,
            "expo" | "exponential" => CurveFamily::Exponential,
            "back" => CurveFamily::Back,
            "elastic" => CurveFamily::Elastic,
            "bounce" => CurveFamily::Bounce,
            _ => return Err(ParseEasingError(s.to_string())),
        };

        Ok(Self::new(family, direction))
    }
}

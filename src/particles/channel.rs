//! 粒子补间通道

/// 粒子的六个补间通道
///
/// 每个通道拥有独立的配置和补间器，按 `index()` 存放在定长数组中。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleChannel {
    VelocityX,
    VelocityY,
    ColourR,
    ColourG,
    ColourB,
    ColourA,
}

impl ParticleChannel {
    pub const COUNT: usize = 6;

    pub const ALL: [ParticleChannel; Self::COUNT] = [
        ParticleChannel::VelocityX,
        ParticleChannel::VelocityY,
        ParticleChannel::ColourR,
        ParticleChannel::ColourG,
        ParticleChannel::ColourB,
        ParticleChannel::ColourA,
    ];

    pub const VELOCITY: [ParticleChannel; 2] =
        [ParticleChannel::VelocityX, ParticleChannel::VelocityY];

    pub const COLOUR: [ParticleChannel; 4] = [
        ParticleChannel::ColourR,
        ParticleChannel::ColourG,
        ParticleChannel::ColourB,
        ParticleChannel::ColourA,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn is_velocity(self) -> bool {
        matches!(self, ParticleChannel::VelocityX | ParticleChannel::VelocityY)
    }

    /// 颜色通道在 RGBA 数组中的下标
    pub fn colour_index(self) -> Option<usize> {
        match self {
            ParticleChannel::ColourR => Some(0),
            ParticleChannel::ColourG => Some(1),
            ParticleChannel::ColourB => Some(2),
            ParticleChannel::ColourA => Some(3),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ParticleChannel::VelocityX => "velocity_x",
            ParticleChannel::VelocityY => "velocity_y",
            ParticleChannel::ColourR => "colour_r",
            ParticleChannel::ColourG => "colour_g",
            ParticleChannel::ColourB => "colour_b",
            ParticleChannel::ColourA => "colour_a",
        }
    }
}

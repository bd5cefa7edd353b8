use crate::core::random::SimulationRng;
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 随机数配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// 固定种子；为空时使用系统熵
    #[serde(default)]
    pub seed: Option<u64>,
}

impl_default!(RandomConfig { seed: None });

impl RandomConfig {
    /// 按配置创建生成器
    pub fn build_rng(&self) -> SimulationRng {
        match self.seed {
            Some(seed) => SimulationRng::seeded(seed),
            None => SimulationRng::from_entropy(),
        }
    }
}

//! 随机数源
//!
//! 粒子目标值的方差通过显式传入的随机数源抽取，而不是进程级单例。
//! 多线程共享同一个生成器时由调用方负责同步。

use rand::rngs::StdRng;
use rand::{Error as RandError, Rng, RngCore, SeedableRng};

/// 均匀分布随机数源
pub trait RandomSource {
    /// 在 `[min, max]` 内均匀抽取一个值
    ///
    /// - `min > max` 时交换边界
    /// - `min == max` 时直接返回 `min`（零方差不消耗随机数）
    /// - 任一边界非有限值时返回 `min`
    /// - 区间宽度超出 f32 范围时仍返回区间内的值
    fn random_range(&mut self, min: f32, max: f32) -> f32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if !min.is_finite() || !max.is_finite() || min == max {
            return min;
        }
        let (low, high) = if min > max { (max, min) } else { (min, max) };
        if (high - low).is_finite() {
            self.gen_range(low..=high)
        } else {
            // 区间宽度溢出 f32 时按权重插值
            let u: f32 = self.gen();
            low * (1.0 - u) + high * u
        }
    }
}

/// 模拟用随机数生成器
///
/// 给定种子时结果可复现，便于测试和回放。
#[derive(Debug, Clone)]
pub struct SimulationRng {
    inner: StdRng,
    seed: Option<u64>,
}

impl SimulationRng {
    /// 使用固定种子创建
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// 使用系统熵创建
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// 创建时使用的种子（熵源创建时为 None）
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SimulationRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for SimulationRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.inner.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_variance_returns_min() {
        let mut rng = SimulationRng::seeded(7);
        assert_eq!(rng.random_range(0.0, 0.0), 0.0);
        assert_eq!(rng.random_range(3.5, 3.5), 3.5);
    }

    #[test]
    fn test_overflowing_width_stays_in_bounds() {
        let mut rng = SimulationRng::seeded(1);
        for _ in 0..100 {
            let value = rng.random_range(-3.0e38, 3.0e38);
            assert!(value.is_finite());
            assert!((-3.0e38..=3.0e38).contains(&value));
        }
        let value = rng.random_range(f32::MAX, -f32::MAX);
        assert!(value.is_finite());
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = SimulationRng::seeded(42);
        let mut b = SimulationRng::seeded(42);

        for _ in 0..16 {
            assert_eq!(a.random_range(-5.0, 5.0), b.random_range(-5.0, 5.0));
        }
        assert_eq!(a.seed(), Some(42));
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let mut rng = SimulationRng::seeded(3);
        for _ in 0..100 {
            let v = rng.random_range(10.0, -10.0);
            assert!((-10.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn test_non_finite_bounds() {
        let mut rng = SimulationRng::seeded(1);
        assert_eq!(rng.random_range(1.0, f32::INFINITY), 1.0);
        assert!(rng.random_range(f32::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut rng = SimulationRng::seeded(9);
        let source: &mut dyn RandomSource = &mut rng;
        let v = source.random_range(0.0, 1.0);
        assert!((0.0..=1.0).contains(&v));
    }

    proptest! {
        #[test]
        fn random_range_stays_in_bounds(
            seed in any::<u64>(),
            a in -1000.0f32..1000.0,
            b in -1000.0f32..1000.0,
        ) {
            let mut rng = SimulationRng::seeded(seed);
            let v = rng.random_range(a, b);
            prop_assert!(v >= a.min(b) && v <= a.max(b));
        }
    }
}

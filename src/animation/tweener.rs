//! 标量补间器
//!
//! `Tweener` 持有一个标量的插值状态，每次 `update` 按外部给定的帧 delta 推进。
//!
//! 推进顺序：先累加 `elapsed`，再按限制在 `[0, 1]` 的进度计算 `value`，
//! 所以 `duration / delta` 次更新后 `value` 正好落在 `target` 上。

use super::easing::EasingFunction;
use crate::core::time::sanitize_delta;
use std::fmt;

/// 每次更新后以新值调用的回调
pub type UpdateFunc = Box<dyn FnMut(f32) + Send>;

/// 完成信号回调
pub type FinishedFunc = Box<dyn FnMut() + Send>;

/// 完成信号的触发策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionSignal {
    /// 只在第一次观察到完成时触发，`reset` 后重新生效
    #[default]
    Once,
    /// 完成后每次调用 `is_finished` 都触发
    EveryCall,
}

/// 标量补间器
pub struct Tweener {
    initial: f32,
    target: f32,
    value: f32,
    elapsed: f32,
    duration: f32,
    easing: EasingFunction,
    update_func: Option<UpdateFunc>,
    finished_func: Option<FinishedFunc>,
    completion: CompletionSignal,
    finished_signalled: bool,
}

impl Tweener {
    pub fn new(initial: f32, target: f32, duration: f32, easing: EasingFunction) -> Self {
        Self {
            initial,
            target,
            value: initial,
            elapsed: 0.0,
            duration,
            easing,
            update_func: None,
            finished_func: None,
            completion: CompletionSignal::default(),
            finished_signalled: false,
        }
    }

    /// 设置更新回调
    pub fn with_update_func(mut self, func: impl FnMut(f32) + Send + 'static) -> Self {
        self.update_func = Some(Box::new(func));
        self
    }

    /// 设置完成回调
    pub fn with_finished_func(mut self, func: impl FnMut() + Send + 'static) -> Self {
        self.finished_func = Some(Box::new(func));
        self
    }

    pub fn with_completion_signal(mut self, completion: CompletionSignal) -> Self {
        self.completion = completion;
        self
    }

    /// 推进一帧，返回本帧消耗的 delta
    ///
    /// 已到期时不改变 `value` 也不累加 `elapsed`。
    /// `duration <= 0` 视为立即到期，`value` 直接取 `target`。
    /// 负的或非有限的 delta 按 0 处理，`elapsed` 只增不减。
    pub fn update(&mut self, delta: f32) -> f32 {
        if !(self.duration > 0.0) {
            if self.value != self.target {
                self.value = self.target;
                self.notify_update();
            }
            return delta;
        }
        if self.is_expired() {
            return delta;
        }

        self.elapsed += sanitize_delta(delta);
        self.value = self.calculate_value();
        self.notify_update();

        delta
    }

    fn notify_update(&mut self) {
        if let Some(func) = self.update_func.as_mut() {
            func(self.value);
        }
    }

    /// 是否已完成，并按策略触发完成信号
    pub fn is_finished(&mut self) -> bool {
        if !self.is_expired() {
            return false;
        }

        let fire = match self.completion {
            CompletionSignal::Once => !self.finished_signalled,
            CompletionSignal::EveryCall => true,
        };
        if fire {
            self.finished_signalled = true;
            tracing::trace!(target: "tween", "Tween finished at {}", self.value);
            if let Some(func) = self.finished_func.as_mut() {
                func();
            }
        }
        true
    }

    /// 是否已到期（无副作用）
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// 回到起点：`elapsed = 0`，`value = initial`
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.value = self.initial;
        self.finished_signalled = false;
    }

    pub fn set_initial(&mut self, value: f32) {
        self.initial = value;
    }

    pub fn set_target(&mut self, value: f32) {
        self.target = value;
    }

    pub fn set_duration(&mut self, value: f32) {
        self.duration = value;
    }

    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.easing = easing;
    }

    pub fn set_update_func(&mut self, func: Option<UpdateFunc>) {
        self.update_func = func;
    }

    pub fn set_finished_func(&mut self, func: Option<FinishedFunc>) {
        self.finished_func = func;
    }

    pub fn set_completion_signal(&mut self, completion: CompletionSignal) {
        self.completion = completion;
    }

    fn calculate_value(&self) -> f32 {
        let x = self.easing.ease(self.progress());
        self.initial + x * (self.target - self.initial)
    }

    /// 归一化进度，`duration <= 0` 时为 1
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn initial(&self) -> f32 {
        self.initial
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn easing(&self) -> EasingFunction {
        self.easing
    }

    pub fn completion_signal(&self) -> CompletionSignal {
        self.completion
    }
}

impl Default for Tweener {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, EasingFunction::LINEAR)
    }
}

impl fmt::Debug for Tweener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tweener")
            .field("initial", &self.initial)
            .field("target", &self.target)
            .field("value", &self.value)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("has_update_func", &self.update_func.is_some())
            .field("has_finished_func", &self.finished_func.is_some())
            .field("completion", &self.completion)
            .finish()
    }
}

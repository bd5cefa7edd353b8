//! 核心宏定义
//!
//! 提供统一的宏来减少配置结构体的样板代码

/// 为结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// use particle_tween::impl_default;
///
/// struct StepConfig {
///     fixed_delta: f32,
///     label: String,
/// }
///
/// impl_default!(StepConfig {
///     fixed_delta: 1.0 / 60.0,
///     label: String::new(),
/// });
///
/// assert_eq!(StepConfig::default().label, "");
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}

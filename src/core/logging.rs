//! 日志初始化
//!
//! 基于 tracing。`RUST_LOG` 优先，未设置时使用配置中的级别。

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// 初始化日志系统
///
/// 重复调用是安全的：已有全局 subscriber 时返回 false。
pub fn init_logging(config: &LoggingConfig) -> bool {
    if !config.log_to_console {
        return false;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(target: "particle", "Logging initialised at {:?}", config.level);
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn test_level_directive() {
        assert_eq!(LogLevel::Warn.as_directive(), "warn");
        assert_eq!(LogLevel::Trace.as_directive(), "trace");
    }

    #[test]
    fn test_console_disabled_skips_install() {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            log_to_console: false,
        };
        assert!(!init_logging(&config));
    }
}

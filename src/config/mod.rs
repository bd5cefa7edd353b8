/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量和运行时校验
use crate::core::error::ParticleDataError;
use crate::impl_default;
use crate::particles::ParticleData;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod random;
pub mod timing;

pub use random::RandomConfig;
pub use timing::TimingConfig;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
    /// 粒子数据错误
    #[error("Particle data error: {0}")]
    Data(#[from] ParticleDataError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 模拟主配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// 时间步配置
    #[serde(default)]
    pub timing: TimingConfig,

    /// 随机数配置
    #[serde(default)]
    pub random: RandomConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,

    /// 粒子配置
    #[serde(default)]
    pub particle: ParticleData,
}

impl SimulationConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("PARTICLE_TWEEN_FIXED_DELTA") {
            if let Ok(delta) = val.parse() {
                self.timing.fixed_delta = delta;
            }
        }
        if let Ok(val) = env::var("PARTICLE_TWEEN_MAX_DELTA") {
            if let Ok(delta) = val.parse() {
                self.timing.max_delta = delta;
            }
        }
        if let Ok(val) = env::var("PARTICLE_TWEEN_SEED") {
            if let Ok(seed) = val.parse() {
                self.random.seed = Some(seed);
            }
        }
        if let Ok(val) = env::var("PARTICLE_TWEEN_LOG_LEVEL") {
            if let Some(level) = LogLevel::parse(&val) {
                self.logging.level = level;
            }
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.timing.validate()?;
        self.particle.validate()?;
        Ok(())
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./particle_tween.toml
    /// 2. ./particle_tween.json
    /// 3. ~/.config/particle_tween/config.toml
    /// 4. 使用默认配置
    pub fn load_or_default() -> Self {
        let mut candidates = vec![
            PathBuf::from("particle_tween.toml"),
            PathBuf::from("particle_tween.json"),
        ];
        if let Some(home) = env::var_os("HOME") {
            candidates.push(
                PathBuf::from(home)
                    .join(".config")
                    .join("particle_tween")
                    .join("config.toml"),
            );
        }

        Self::load_first(&candidates).unwrap_or_else(|| {
            tracing::info!(target: "config", "Using default configuration");
            Self::default()
        })
    }

    /// 按顺序尝试候选文件，返回第一个能成功解析的配置
    ///
    /// `.json` 后缀按 JSON 解析，其余按 TOML 解析。
    pub fn load_first<P: AsRef<Path>>(candidates: &[P]) -> Option<Self> {
        candidates.iter().find_map(|path| {
            let path = path.as_ref();
            let loaded = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => Self::from_json_file(path),
                _ => Self::from_toml_file(path),
            };
            match loaded {
                Ok(config) => {
                    tracing::info!(target: "config", "Loaded config from {:?}", path);
                    Some(config)
                }
                Err(ConfigError::FileError(_)) => None,
                Err(e) => {
                    tracing::warn!(target: "config", "Skipping {:?}: {}", path, e);
                    None
                }
            }
        })
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别（`RUST_LOG` 未设置时生效）
    pub level: LogLevel,

    /// 是否输出到控制台
    pub log_to_console: bool,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    log_to_console: true,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    /// 不区分大小写解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// 对应的 tracing 过滤指令
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

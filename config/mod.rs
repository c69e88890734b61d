use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// 配置相关错误
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to load config: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
    #[error("Failed to install logger: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),
}

/// rbtree 配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RbTreeConfig {
    /// 树的行为配置
    #[serde(default)]
    pub tree: TreeSettings,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 树的行为配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSettings {
    /// 每次变更后运行结构校验，失败时返回 `TreeError::Corrupted`
    #[serde(default = "default_check_invariants")]
    pub check_invariants: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_check_invariants() -> bool {
    false
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            check_invariants: default_check_invariants(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            output: default_log_output(),
            log_file: None,
        }
    }
}

impl RbTreeConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（TOML，可选）
    /// 3. 环境变量（RBTREE__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use rbtree::config::RbTreeConfig;
    ///
    /// // 加载配置（如果文件不存在，使用默认配置）
    /// let config = RbTreeConfig::from_file("rbtree.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> Result<Self, SettingsError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from_str(
                include_str!("default.toml"),
                ::config::FileFormat::Toml,
            ))
            .add_source(::config::File::new(path, ::config::FileFormat::Toml).required(false))
            .add_source(::config::Environment::with_prefix("RBTREE").separator("__"))
            .build()?;

        let config: RbTreeConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> Result<(), SettingsError> {
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// 验证配置
    ///
    /// 检查日志级别，以及 file 输出是否指定了日志文件
    pub fn validate(&self) -> Result<(), SettingsError> {
        parse_level(&self.logging.level)?;

        match self.logging.output.as_str() {
            "stdout" => {}
            "file" => {
                if self.logging.log_file.is_none() {
                    return Err(SettingsError::Invalid(
                        "Log output is 'file' but log_file path is not specified".to_string(),
                    ));
                }
            }
            other => {
                return Err(SettingsError::Invalid(format!(
                    "Invalid log output: '{}'. Must be one of: stdout, file",
                    other
                )))
            }
        }

        Ok(())
    }
}

fn parse_level(level: &str) -> Result<Level, SettingsError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(SettingsError::Invalid(format!(
            "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
            level
        ))),
    }
}

/// 初始化日志系统
///
/// 全局 subscriber 只能安装一次，重复调用返回 `SettingsError::Logger`
pub fn init_logging(config: &LoggingConfig) -> Result<(), SettingsError> {
    let filter = LevelFilter::from_level(parse_level(&config.level)?);

    match (config.output.as_str(), &config.log_file) {
        ("file", Some(log_file)) => {
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::sync::Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(filter)
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .with(filter)
                .try_init()?;
        }
    }

    Ok(())
}

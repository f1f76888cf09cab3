//! Sink 配置与进程级安装

use super::error::LogError;
use super::severity::Severity;
use super::sink::{platform_sink, LogFacadeSink, LogSink};
use log::{debug, error};
use once_cell::sync::OnceCell;

/// 默认的 logcat tag
pub const DEFAULT_TAG: &str = "stoic";

static LOGGER: OnceCell<Logger> = OnceCell::new();

/// 日志配置
///
/// ```ignore
/// stoic_log::init(LogConfig::default().with_tag("stoic-agent"))?;
/// ```
pub struct LogConfig {
    tag: String,
    sink: Option<Box<dyn LogSink>>,
    facade: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            sink: None,
            facade: false,
        }
    }
}

impl LogConfig {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self.facade = false;
        self
    }

    /// 经由 `log` 门面输出；Android 上同时安装 android_logger
    pub fn with_facade(mut self) -> Self {
        self.sink = Some(Box::new(LogFacadeSink));
        self.facade = true;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn validate(&self) -> Result<(), LogError> {
        if self.tag.is_empty() || self.tag.contains('\0') {
            return Err(LogError::InvalidTag(self.tag.clone()));
        }
        Ok(())
    }
}

/// 已安装的 sink 与 tag
pub(crate) struct Logger {
    tag: String,
    sink: Box<dyn LogSink>,
}

impl Logger {
    fn from_config(config: LogConfig) -> Self {
        Self {
            tag: config.tag,
            sink: config.sink.unwrap_or_else(platform_sink),
        }
    }

    pub(crate) fn emit(&self, severity: Severity, line: &str) {
        self.sink.write(severity, &self.tag, line);
    }
}

/// 安装 sink；只能成功一次
pub fn init(config: LogConfig) -> Result<(), LogError> {
    config.validate()?;
    let facade = config.facade;
    let tag = config.tag.clone();

    LOGGER
        .set(Logger::from_config(config))
        .map_err(|_| LogError::AlreadyInitialized)?;

    if facade {
        crate::init_facade(&tag);
    }
    debug!("stoic_log: sink installed (tag={}, facade={})", tag, facade);
    Ok(())
}

/// 与 [`init`] 相同，但已初始化时静默忽略
pub fn init_once(config: LogConfig) {
    match init(config) {
        Ok(()) | Err(LogError::AlreadyInitialized) => {}
        Err(e) => error!("stoic_log: {}", e),
    }
}

/// 当前生效的 tag
pub fn tag() -> &'static str {
    &logger().tag
}

/// 未显式初始化时，首次写日志使用默认配置
pub(crate) fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::from_config(LogConfig::default()))
}

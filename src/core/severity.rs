use std::fmt;

/// 日志级别，按紧急程度递增排序
///
/// `Fatal` 在写出日志后终止进程。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// liblog 的 `android_LogPriority` 数值
    pub fn android_priority(self) -> i32 {
        match self {
            Severity::Debug => 3,
            Severity::Info => 4,
            Severity::Warn => 5,
            Severity::Error => 6,
            Severity::Fatal => 7,
        }
    }

    /// 从 liblog 优先级换算，越界值夹到 Debug..=Fatal
    pub fn from_android_priority(priority: i32) -> Self {
        match priority {
            i32::MIN..=3 => Severity::Debug,
            4 => Severity::Info,
            5 => Severity::Warn,
            6 => Severity::Error,
            _ => Severity::Fatal,
        }
    }

    /// logcat brief 格式里的单字母标记
    pub fn as_char(self) -> char {
        match self {
            Severity::Debug => 'D',
            Severity::Info => 'I',
            Severity::Warn => 'W',
            Severity::Error => 'E',
            Severity::Fatal => 'F',
        }
    }

    /// `log` 门面没有 fatal 级别，Fatal 映射为 Error
    pub fn to_log_level(self) -> log::Level {
        match self {
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warn => log::Level::Warn,
            Severity::Error | Severity::Fatal => log::Level::Error,
        }
    }

    pub fn is_fatal(self) -> bool {
        self == Severity::Fatal
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        };
        f.write_str(name)
    }
}

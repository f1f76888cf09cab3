//! 日志输出端
//!
//! 进程内同一时刻只有一个 sink 生效，由 [`crate::core::config`] 安装。

use super::severity::Severity;
use std::io::Write;

/// 接收已格式化日志行的输出端
///
/// 实现必须可以被多个线程同时调用；串行化由底层平台负责。
pub trait LogSink: Send + Sync {
    fn write(&self, severity: Severity, tag: &str, line: &str);
}

#[cfg(target_os = "android")]
mod liblog {
    use std::os::raw::{c_char, c_int};

    #[link(name = "log")]
    extern "C" {
        pub fn __android_log_write(prio: c_int, tag: *const c_char, text: *const c_char) -> c_int;
    }
}

/// 写入 logcat（liblog）
#[cfg(target_os = "android")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogcatSink;

#[cfg(target_os = "android")]
impl LogSink for LogcatSink {
    fn write(&self, severity: Severity, tag: &str, line: &str) {
        use std::ffi::CString;

        // 与 C 的 %s 一致：遇到 NUL 截断
        let tag = CString::new(until_nul(tag)).unwrap_or_default();
        let text = CString::new(until_nul(line)).unwrap_or_default();
        unsafe {
            liblog::__android_log_write(severity.android_priority(), tag.as_ptr(), text.as_ptr());
        }
    }
}

#[cfg(target_os = "android")]
fn until_nul(s: &str) -> &str {
    s.split('\0').next().unwrap_or_default()
}

/// 以 logcat brief 格式写到标准错误：`F/stoic: file.rs:12: boom`
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl StderrSink {
    pub fn format(severity: Severity, tag: &str, line: &str) -> String {
        format!("{}/{}: {}", severity.as_char(), tag, line)
    }
}

impl LogSink for StderrSink {
    fn write(&self, severity: Severity, tag: &str, line: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", Self::format(severity, tag, line));
        let _ = stderr.flush();
    }
}

/// 转发到 `log` 门面，target 为 tag
///
/// 在 Android 上配合 [`crate::init_logging`] 安装的 android_logger 使用。
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacadeSink;

impl LogSink for LogFacadeSink {
    fn write(&self, severity: Severity, tag: &str, line: &str) {
        log::log!(target: tag, severity.to_log_level(), "{}", line);
        if severity.is_fatal() {
            log::logger().flush();
        }
    }
}

/// 当前平台的默认 sink
pub fn platform_sink() -> Box<dyn LogSink> {
    #[cfg(target_os = "android")]
    {
        Box::new(LogcatSink)
    }

    #[cfg(not(target_os = "android"))]
    {
        Box::new(StderrSink)
    }
}

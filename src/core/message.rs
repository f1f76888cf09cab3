//! 单条日志的拼装器
//!
//! `LogMessage` 在作用域结束（drop）时写出 `"<file>:<line>: <text>"`，
//! 级别为 Fatal 时随后 abort。

use super::config::logger;
use super::severity::Severity;
use std::borrow::Cow;
use std::fmt::{self, Write};
use std::panic::Location;

#[derive(Debug)]
pub struct LogMessage {
    file: Cow<'static, str>,
    line: u32,
    severity: Severity,
    body: String,
}

impl LogMessage {
    /// `file` 通常是 `file!()`；来自 C 的文件名可以传入 owned 字符串
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32, severity: Severity) -> Self {
        Self {
            file: file.into(),
            line,
            severity,
            body: String::new(),
        }
    }

    /// 以调用处作为源码位置
    #[track_caller]
    pub fn here(severity: Severity) -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), severity)
    }

    /// 追加任意可 Display 的值
    pub fn append<T: fmt::Display>(&mut self, value: T) -> &mut Self {
        let _ = write!(self.body, "{}", value);
        self
    }

    pub fn append_debug<T: fmt::Debug>(&mut self, value: T) -> &mut Self {
        let _ = write!(self.body, "{:?}", value);
        self
    }

    /// 以地址形式追加指针
    pub fn append_ptr<T: ?Sized>(&mut self, ptr: *const T) -> &mut Self {
        let _ = write!(self.body, "{:p}", ptr);
        self
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn render(&self) -> String {
        format!("{}:{}: {}", self.file, self.line, self.body)
    }
}

impl Write for LogMessage {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.body.push_str(s);
        Ok(())
    }
}

impl Drop for LogMessage {
    fn drop(&mut self) {
        logger().emit(self.severity, &self.render());
        if self.severity.is_fatal() {
            std::process::abort();
        }
    }
}

/// 写出一条 Fatal 日志并终止进程
#[cold]
#[inline(never)]
pub fn fatal_at(file: &'static str, line: u32, args: fmt::Arguments<'_>) -> ! {
    let mut message = LogMessage::new(file, line, Severity::Fatal);
    let _ = message.write_fmt(args);
    drop(message);
    // drop 中已经 abort
    std::process::abort()
}

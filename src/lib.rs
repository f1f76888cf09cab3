//! Stoic native 组件的日志与断言
//!
//! 替代 android-base/logging：`log_message!` 拼装一条日志并在语句结束时写入 logcat，
//! `check!` 系列在条件不成立时写出 Fatal 日志并 abort。

pub mod api;
pub mod core;
#[cfg(test)]
mod testing;

pub use crate::core::{
    fatal_at, init, init_once, tag, LogConfig, LogError, LogMessage, LogSink, Severity,
    DEFAULT_TAG,
};

/// 为 `log` 门面安装 android_logger（tag 为 [`DEFAULT_TAG`]）
pub fn init_logging() {
    init_facade(DEFAULT_TAG);
}

pub(crate) fn init_facade(tag: &str) {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag(tag),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        // 非 Android 平台由宿主自行安装 log 实现
        let _ = tag;
    }
}

//! C ABI 入口，供同一 so 内的 C/C++ 代码写日志

use crate::core::message::LogMessage;
use crate::core::severity::Severity;
use std::borrow::Cow;
use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

/// 以 liblog 优先级写一条日志，Fatal（7 及以上）写出后 abort
///
/// 非 UTF-8 的文件名与消息按 lossy 方式转换。
///
/// # Safety
/// `file` 与 `msg` 为 NULL 或以 NUL 结尾的有效 C 字符串，调用期间有效。
#[no_mangle]
pub unsafe extern "C" fn stoic_log_write(
    priority: c_int,
    file: *const c_char,
    line: c_int,
    msg: *const c_char,
) {
    let severity = Severity::from_android_priority(priority);
    let file = if file.is_null() {
        Cow::Borrowed("(null)")
    } else {
        Cow::Owned(CStr::from_ptr(file).to_string_lossy().into_owned())
    };
    let mut message = LogMessage::new(file, line.max(0) as u32, severity);
    if !msg.is_null() {
        message.append(CStr::from_ptr(msg).to_string_lossy());
    }
}

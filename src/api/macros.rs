//! 调用处宏：自动捕获 `file!()` / `line!()`
//!
//! ```ignore
//! log_message!(Info).append("attached to pid ").append(pid);
//! log_at!(Warn, "plugin {} took {}ms", name, elapsed);
//! check!(fd >= 0, "open {} failed", path);
//! check_eq!(version, PROTOCOL_VERSION);
//! ```

/// 构造一条日志；语句结束时写出
#[macro_export]
macro_rules! log_message {
    ($severity:ident) => {
        $crate::LogMessage::new(file!(), line!(), $crate::Severity::$severity)
    };
}

/// 按格式串写一条日志
#[macro_export]
macro_rules! log_at {
    ($severity:ident, $($arg:tt)+) => {{
        let mut message = $crate::log_message!($severity);
        let _ = ::std::fmt::Write::write_fmt(&mut message, format_args!($($arg)+));
    }};
}

/// 写出 Fatal 日志并终止进程，类型为 `!`
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::fatal_at(file!(), line!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !($cond) {
            $crate::api::check::check_failed(file!(), line!(), stringify!($cond), None);
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            $crate::api::check::check_failed(
                file!(),
                line!(),
                stringify!($cond),
                Some(format_args!($($arg)+)),
            );
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_op {
    ($op:tt, $a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => {
                if !(*a $op *b) {
                    #[allow(unused_imports)]
                    use $crate::api::check::{
                        RenderDebug as _, RenderDisplay as _, RenderPointer as _,
                    };
                    $crate::api::check::check_op_failed(
                        file!(),
                        line!(),
                        stringify!($op),
                        stringify!($a),
                        stringify!($b),
                        &(&&$crate::api::check::Operand(a)).render(),
                        &(&&$crate::api::check::Operand(b)).render(),
                        None,
                    );
                }
            }
        }
    };
    ($op:tt, $a:expr, $b:expr, $($arg:tt)+) => {
        match (&$a, &$b) {
            (a, b) => {
                if !(*a $op *b) {
                    #[allow(unused_imports)]
                    use $crate::api::check::{
                        RenderDebug as _, RenderDisplay as _, RenderPointer as _,
                    };
                    $crate::api::check::check_op_failed(
                        file!(),
                        line!(),
                        stringify!($op),
                        stringify!($a),
                        stringify!($b),
                        &(&&$crate::api::check::Operand(a)).render(),
                        &(&&$crate::api::check::Operand(b)).render(),
                        Some(format_args!($($arg)+)),
                    );
                }
            }
        }
    };
}

#[macro_export]
macro_rules! check_eq {
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => { $crate::__check_op!(==, $a, $b $(, $($arg)+)?) };
}

#[macro_export]
macro_rules! check_ne {
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => { $crate::__check_op!(!=, $a, $b $(, $($arg)+)?) };
}

#[macro_export]
macro_rules! check_lt {
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => { $crate::__check_op!(<, $a, $b $(, $($arg)+)?) };
}

#[macro_export]
macro_rules! check_le {
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => { $crate::__check_op!(<=, $a, $b $(, $($arg)+)?) };
}

#[macro_export]
macro_rules! check_gt {
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => { $crate::__check_op!(>, $a, $b $(, $($arg)+)?) };
}

#[macro_export]
macro_rules! check_ge {
    ($a:expr, $b:expr $(, $($arg:tt)+)?) => { $crate::__check_op!(>=, $a, $b $(, $($arg)+)?) };
}

//! 断言：失败时写出 Fatal 日志并 abort，调试与发布构建行为一致

#![allow(clippy::neg_cmp_op_on_partial_ord)]

use crate::core::message::fatal_at;
use std::fmt::{self, Debug, Display};
use std::panic::Location;

/// 条件不成立时终止进程
///
/// ```ignore
/// check(fd >= 0, "fd >= 0");
/// ```
#[inline]
#[track_caller]
pub fn check(condition: bool, description: &str) {
    if !condition {
        let location = Location::caller();
        check_failed(location.file(), location.line(), description, None);
    }
}

#[inline]
#[track_caller]
pub fn check_eq<A, B>(a: A, b: B, name_a: &str, name_b: &str)
where
    A: PartialEq<B> + Display,
    B: Display,
{
    if a != b {
        op_failed_here("==", name_a, name_b, &a, &b);
    }
}

#[inline]
#[track_caller]
pub fn check_ne<A, B>(a: A, b: B, name_a: &str, name_b: &str)
where
    A: PartialEq<B> + Display,
    B: Display,
{
    if a == b {
        op_failed_here("!=", name_a, name_b, &a, &b);
    }
}

#[inline]
#[track_caller]
pub fn check_lt<A, B>(a: A, b: B, name_a: &str, name_b: &str)
where
    A: PartialOrd<B> + Display,
    B: Display,
{
    if !(a < b) {
        op_failed_here("<", name_a, name_b, &a, &b);
    }
}

#[inline]
#[track_caller]
pub fn check_le<A, B>(a: A, b: B, name_a: &str, name_b: &str)
where
    A: PartialOrd<B> + Display,
    B: Display,
{
    if !(a <= b) {
        op_failed_here("<=", name_a, name_b, &a, &b);
    }
}

#[inline]
#[track_caller]
pub fn check_gt<A, B>(a: A, b: B, name_a: &str, name_b: &str)
where
    A: PartialOrd<B> + Display,
    B: Display,
{
    if !(a > b) {
        op_failed_here(">", name_a, name_b, &a, &b);
    }
}

#[inline]
#[track_caller]
pub fn check_ge<A, B>(a: A, b: B, name_a: &str, name_b: &str)
where
    A: PartialOrd<B> + Display,
    B: Display,
{
    if !(a >= b) {
        op_failed_here(">=", name_a, name_b, &a, &b);
    }
}

#[cold]
#[track_caller]
fn op_failed_here(op: &str, name_a: &str, name_b: &str, a: &dyn Display, b: &dyn Display) -> ! {
    let location = Location::caller();
    check_op_failed(location.file(), location.line(), op, name_a, name_b, a, b, None)
}

/// 宏里的操作数：依次尝试 Display、指针地址（`{:p}`）、Debug
///
/// 选择靠方法解析的自动引用顺序完成，只在具体类型的调用处生效。
#[doc(hidden)]
pub struct Operand<'a, T>(pub &'a T);

impl<T> Clone for Operand<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Operand<'_, T> {}

#[doc(hidden)]
pub enum Rendered<'a> {
    Display(&'a dyn Display),
    Pointer(&'a dyn fmt::Pointer),
    Debug(&'a dyn Debug),
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Display(value) => write!(f, "{}", value),
            Rendered::Pointer(value) => write!(f, "{:p}", value),
            Rendered::Debug(value) => write!(f, "{:?}", value),
        }
    }
}

#[doc(hidden)]
pub trait RenderDisplay<'a> {
    fn render(self) -> Rendered<'a>;
}

impl<'a, T: Display> RenderDisplay<'a> for &&Operand<'a, T> {
    fn render(self) -> Rendered<'a> {
        Rendered::Display(self.0)
    }
}

#[doc(hidden)]
pub trait RenderPointer<'a> {
    fn render(self) -> Rendered<'a>;
}

impl<'a, T: fmt::Pointer> RenderPointer<'a> for &Operand<'a, T> {
    fn render(self) -> Rendered<'a> {
        Rendered::Pointer(self.0)
    }
}

#[doc(hidden)]
pub trait RenderDebug<'a> {
    fn render(self) -> Rendered<'a>;
}

impl<'a, T: Debug> RenderDebug<'a> for Operand<'a, T> {
    fn render(self) -> Rendered<'a> {
        Rendered::Debug(self.0)
    }
}

fn condition_failure(description: &str) -> String {
    format!("Check failed: {} ", description)
}

fn op_failure(op: &str, name_a: &str, name_b: &str, a: &dyn Display, b: &dyn Display) -> String {
    format!(
        "Check failed: {} {} {} ({}={}, {}={}) ",
        name_a, op, name_b, name_a, a, name_b, b
    )
}

fn fail(file: &'static str, line: u32, text: String, extra: Option<fmt::Arguments<'_>>) -> ! {
    match extra {
        Some(extra) => fatal_at(file, line, format_args!("{}{}", text, extra)),
        None => fatal_at(file, line, format_args!("{}", text)),
    }
}

#[doc(hidden)]
#[cold]
#[inline(never)]
pub fn check_failed(
    file: &'static str,
    line: u32,
    description: &str,
    extra: Option<fmt::Arguments<'_>>,
) -> ! {
    fail(file, line, condition_failure(description), extra)
}

#[doc(hidden)]
#[cold]
#[inline(never)]
#[allow(clippy::too_many_arguments)]
pub fn check_op_failed(
    file: &'static str,
    line: u32,
    op: &str,
    name_a: &str,
    name_b: &str,
    a: &dyn Display,
    b: &dyn Display,
    extra: Option<fmt::Arguments<'_>>,
) -> ! {
    fail(file, line, op_failure(op, name_a, name_b, a, b), extra)
}

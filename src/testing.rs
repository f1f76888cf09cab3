//! 测试辅助：按线程捕获日志行，以及在子进程里跑会 abort 的用例

use crate::core::config::{init, LogConfig};
use crate::core::severity::Severity;
use crate::core::sink::LogSink;
use std::cell::RefCell;
use std::process::{Command, Output};
use std::sync::Once;

pub(crate) const TEST_TAG: &str = "stoic-test";

/// 子进程标记，存在时用例直接执行致命路径
const FATAL_CHILD_ENV: &str = "STOIC_LOG_FATAL_CHILD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Captured {
    pub severity: Severity,
    pub tag: String,
    pub line: String,
}

thread_local! {
    static CAPTURED: RefCell<Vec<Captured>> = const { RefCell::new(Vec::new()) };
}

pub(crate) struct CaptureSink;

impl LogSink for CaptureSink {
    fn write(&self, severity: Severity, tag: &str, line: &str) {
        CAPTURED.with(|c| {
            c.borrow_mut().push(Captured {
                severity,
                tag: tag.to_string(),
                line: line.to_string(),
            })
        });
    }
}

/// 安装捕获 sink；必须先于任何进程内的日志输出
pub(crate) fn install() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        init(LogConfig::default().with_tag(TEST_TAG).with_sink(CaptureSink))
            .expect("capture sink must be the first sink installed");
    });
}

/// 执行 `f` 并返回当前线程在其间写出的日志
pub(crate) fn capture(f: impl FnOnce()) -> Vec<Captured> {
    install();
    CAPTURED.with(|c| c.borrow_mut().clear());
    f();
    CAPTURED.with(|c| c.take())
}

pub(crate) fn in_fatal_child() -> bool {
    fatal_case().is_some()
}

/// 子进程要执行的用例编号
pub(crate) fn fatal_case() -> Option<String> {
    std::env::var(FATAL_CHILD_ENV).ok()
}

/// 在子进程中只运行 `module::name` 这一个用例
///
/// `module` 传 `module_path!()`，去掉 crate 名后即 libtest 的用例路径。
pub(crate) fn run_fatal_child(module: &str, name: &str) -> Output {
    run_fatal_case(module, name, "1")
}

pub(crate) fn run_fatal_case(module: &str, name: &str, case: &str) -> Output {
    let module = module.split_once("::").map_or(module, |(_, rest)| rest);
    let test_path = format!("{}::{}", module, name);
    let exe = std::env::current_exe().expect("test binary path");

    Command::new(exe)
        .args(["--exact", &test_path, "--nocapture", "--test-threads=1"])
        .env(FATAL_CHILD_ENV, case)
        .output()
        .expect("failed to spawn test binary")
}

/// 断言子进程异常退出，stderr 含预期片段且 abort 之后的语句未执行
pub(crate) fn assert_aborted(output: &Output, expected: &[&str]) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        !output.status.success(),
        "child should abort, status={:?}\nstdout:\n{}\nstderr:\n{}",
        output.status,
        stdout,
        stderr
    );
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.signal(), Some(6), "expected SIGABRT");
    }
    for needle in expected {
        assert!(stderr.contains(needle), "missing {:?} in stderr:\n{}", needle, stderr);
    }
    assert!(!stderr.contains(AFTER_FATAL), "statement after fatal call ran");
    assert!(!stdout.contains(AFTER_FATAL), "statement after fatal call ran");
}

/// 子进程在致命调用之后打印的标记
pub(crate) const AFTER_FATAL: &str = "reached statement after fatal";

//! 日志初始化
//!
//! 库本身只通过 `tracing` 输出诊断信息，订阅者由可执行程序安装。

use tracing_subscriber::EnvFilter;

use crate::core::LOG_TARGET;
use crate::env::EnvConfig;

/// 根据日志级别构建过滤器，只保留本组件的日志
pub fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::new(format!("off,{}={}", LOG_TARGET, log_level))
}

/// 安装写入 stderr 的 fmt 订阅者
///
/// `silent` 时只输出 error 级别；重复初始化会被忽略。
pub fn init_logging(config: &EnvConfig, silent: bool) {
    let log_level = if silent { "error" } else { config.log_level.as_str() };
    let use_ansi = !config.no_color && atty::is(atty::Stream::Stderr);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_ansi(use_ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

//! 日志初始化
//!
//! SDK 内部使用 `tracing` 记录连接生命周期。应用可以调用 [`init_logging`]
//! 安装一个输出到 stderr 的订阅者；使用 `log` crate 的代码也会被桥接过来。

use tracing_subscriber::EnvFilter;

/// 未设置 `RUST_LOG` 时使用的过滤规则
pub const DEFAULT_FILTER: &str = "rovio_client=info,rovio_ffi=info";

/// 使用 `RUST_LOG`（或 [`DEFAULT_FILTER`]）初始化日志
///
/// 只有订阅者和 `log` 桥接都由本次调用装好时才返回 true；重复调用是无害的。
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

/// 使用指定过滤规则初始化日志（忽略 `RUST_LOG`）
pub fn init_logging_with(directives: &str) -> bool {
    install(EnvFilter::new(directives))
}

fn install(filter: EnvFilter) -> bool {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }

    // log -> tracing 桥接；已有其它 log 实现时桥接不上
    match tracing_log::LogTracer::init() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("log bridge not installed: {}", e);
            false
        }
    }
}

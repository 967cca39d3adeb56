// ==========================================
// 设备维护日志系统 - 日志输出
// ==========================================
// tracing-subscriber 文本输出；RUST_LOG 可覆盖默认级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 运行时默认过滤: 全局 info，本库 info
pub const DEFAULT_FILTER: &str = "info,maintenance_hub=info";

/// 测试默认过滤: 只放开本库的 debug（读取/汇总明细）
pub const TEST_FILTER: &str = "warn,maintenance_hub=debug";

/// 构造过滤器: 优先 RUST_LOG，未设置或无法解析时使用 `fallback`
fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// 初始化日志系统（进程启动时调用一次）
///
/// # 示例
/// ```no_run
/// maintenance_hub::logging::init();
/// ```
pub fn init() {
    fmt()
        .with_env_filter(build_filter(DEFAULT_FILTER))
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 测试用日志，输出交给 test harness 捕获
///
/// 多个测试重复调用时只有第一次生效
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(TEST_FILTER))
        .with_test_writer()
        .try_init();
}

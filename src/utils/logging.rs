/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化 tracing
///
/// 日志写到 stderr，stdout 只留给进度输出。`RUST_LOG` 优先。
pub fn init(verbose: bool) {
    let default_level = if verbose {
        "question_bank_merge=debug"
    } else {
        "question_bank_merge=info"
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(source: &str, additions: &str, output: &str) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 题库合并开始 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 原题库: {}", source);
    info!("➕ 新增题目: {}", additions);
    info!("💾 输出: {}", output);
    info!("{}", "=".repeat(60));
}

/// 记录完成信息
pub fn log_finished(total: usize) {
    info!("{}", "=".repeat(60));
    info!(
        "✓ 合并完成: {} 道题目 - {}",
        total,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// 换行压成空格，按字符数截断。
pub fn truncate_text(text: &str, max_len: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() > max_len {
        flat.chars().take(max_len).collect::<String>() + "..."
    } else {
        flat
    }
}

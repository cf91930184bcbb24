use tracing_subscriber::EnvFilter;

/// `RUST_LOG` が無いときのフィルタ。
const DEFAULT_FILTER: &str = "info";

/// ログの出力形式。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum LogFormat {
    /// 1行1イベントの JSON。
    Json,
    /// 人が読むためのテキスト。
    #[default]
    Pretty,
}

/// 購読者の登録に失敗した理由。
#[derive(Debug, thiserror::Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct LoggingError(String);

/// 標準エラー出力へ書く `fmt` 購読者をグローバルに登録する。
///
/// フィルタは `RUST_LOG` に従い、未設定なら `info`。
///
/// # Errors
///
/// すでにグローバル購読者が登録されている場合、`LoggingError` を返す。
#[inline]
pub fn init(format: LogFormat) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    installed.map_err(|err| LoggingError(err.to_string()))
}

// 比較処理専用のカスタムエラー型定義

use thiserror::Error;

/// 比較パイプライン固有のエラー型
#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("ソース読み込みエラー: {source_id} - {cause}")]
    SourceUnavailable {
        source_id: String,
        #[source]
        cause: anyhow::Error,
    },

    #[error("不正なレコード: {source_id} [{record_index}] - {reason}")]
    MalformedRecord {
        source_id: String,
        record_index: usize,
        reason: String,
    },

    #[error("出力書き込みエラー: {target} - {cause}")]
    SinkWriteFailure {
        target: String,
        #[source]
        cause: anyhow::Error,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("シリアライズエラー: {source}")]
    SerializationError {
        #[source]
        source: serde_json::Error,
    },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ComparisonError {
    /// ソース読み込みエラーの作成
    pub fn source_unavailable(source_id: impl Into<String>, cause: anyhow::Error) -> Self {
        Self::SourceUnavailable {
            source_id: source_id.into(),
            cause,
        }
    }

    /// 不正レコードエラーの作成
    pub fn malformed_record(
        source_id: impl Into<String>,
        record_index: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            source_id: source_id.into(),
            record_index,
            reason: reason.into(),
        }
    }

    /// 出力書き込みエラーの作成
    pub fn sink_write_failure(target: impl Into<String>, cause: anyhow::Error) -> Self {
        Self::SinkWriteFailure {
            target: target.into(),
            cause,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// エラーの原因となったソースIDを取得
    pub fn source_id(&self) -> Option<&str> {
        match self {
            Self::SourceUnavailable { source_id, .. } | Self::MalformedRecord { source_id, .. } => {
                Some(source_id)
            }
            _ => None,
        }
    }

    /// 任意ソースとして縮退できるエラーかどうか
    ///
    /// ソース単位の読み込み失敗のみが対象。出力や設定の失敗は常に致命的。
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::SourceUnavailable { .. } | Self::MalformedRecord { .. } => true,
            Self::SinkWriteFailure { .. }
            | Self::ConfigurationError { .. }
            | Self::SerializationError { .. }
            | Self::TaskError { .. } => false,
        }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::SourceUnavailable { source_id, .. } => ErrorContext::new("load_source")
                .with_resource(source_id.clone())
                .with_suggestion(
                    "結果ファイルのパスと JSON 形式 ([{\"name\", \"execution_time_ms\"}]) を確認してください",
                ),
            Self::MalformedRecord {
                source_id,
                record_index,
                ..
            } => ErrorContext::new("parse_record")
                .with_resource(format!("{source_id}[{record_index}]"))
                .with_suggestion("--skip-malformed で不正なレコードを読み飛ばせます"),
            Self::SinkWriteFailure { target, .. } => ErrorContext::new("write_report")
                .with_resource(target.clone())
                .with_suggestion("出力先ディレクトリの書き込み権限を確認してください"),
            Self::ConfigurationError { message } => ErrorContext::new("configuration")
                .with_suggestion(format!("設定を確認してください: {message}")),
            _ => ErrorContext::new("unknown"),
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース（ソースID、出力先等）
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    /// 新しいエラーコンテキストを作成
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    /// リソース情報を追加
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// 提案を追加
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// 比較処理の結果型
pub type ComparisonResult<T> = std::result::Result<T, ComparisonError>;

impl From<tokio::task::JoinError> for ComparisonError {
    fn from(error: tokio::task::JoinError) -> Self {
        ComparisonError::TaskError { source: error }
    }
}

impl From<serde_json::Error> for ComparisonError {
    fn from(error: serde_json::Error) -> Self {
        ComparisonError::SerializationError { source: error }
    }
}

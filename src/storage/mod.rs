use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

pub mod local;

/// 結果ファイルの命名規則（`<source_id>_results.json`）
pub const RESULT_FILE_SUFFIX: &str = "_results.json";

/// ストレージ内のアイテムを表す構造体
#[derive(Debug, Clone)]
pub struct StorageItem {
    /// アイテムの識別子（ローカルならパス）
    pub id: String,
    /// アイテム名（ファイル名）
    pub name: String,
    /// アイテムのサイズ（バイト）
    pub size: u64,
    /// アイテムがディレクトリかどうか
    pub is_directory: bool,
}

impl StorageItem {
    /// 結果ファイル名からソースIDを取り出す
    ///
    /// `pongo2_results.json` → `pongo2`。規則に合わない名前はNone。
    pub fn result_source_id(&self) -> Option<&str> {
        self.name
            .strip_suffix(RESULT_FILE_SUFFIX)
            .filter(|id| !id.is_empty())
    }
}

/// ストレージバックエンドのトレイト
#[automock]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// ストレージ内のアイテムをリストする
    async fn list_items(&self, prefix: &str) -> Result<Vec<StorageItem>>;

    /// アイテムのデータを読み込む
    async fn read_item(&self, id: &str) -> Result<Vec<u8>>;

    /// アイテムを書き込む（全体が書けるか、何も書かないかのどちらか）
    async fn write_item(&self, id: &str, data: &[u8]) -> Result<()>;

    /// ベンチマーク結果ファイルかどうかを判定
    fn is_result_file(&self, item: &StorageItem) -> bool {
        !item.is_directory && item.result_source_id().is_some()
    }
}

// 並列タスク間でバックエンドを共有するため
#[async_trait]
impl<T> StorageBackend for std::sync::Arc<T>
where
    T: StorageBackend + ?Sized,
{
    async fn list_items(&self, prefix: &str) -> Result<Vec<StorageItem>> {
        self.as_ref().list_items(prefix).await
    }

    async fn read_item(&self, id: &str) -> Result<Vec<u8>> {
        self.as_ref().read_item(id).await
    }

    async fn write_item(&self, id: &str, data: &[u8]) -> Result<()> {
        self.as_ref().write_item(id, data).await
    }

    fn is_result_file(&self, item: &StorageItem) -> bool {
        self.as_ref().is_result_file(item)
    }
}

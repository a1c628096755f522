// レポート出力機能
// 標準出力、ファイル（アトミック書き込み）、メモリへの出力先

pub mod implementations;

// 公開API
pub use implementations::{FileSink, MemorySink, StdoutSink, STDOUT_TARGET};

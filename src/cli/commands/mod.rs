pub mod compare;
pub mod inspect;

pub use compare::{build_config, create_sink, execute_compare, run_with_config};
pub use inspect::{execute_inspect, infer_source_id};

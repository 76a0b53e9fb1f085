pub mod ts;

pub use ts::{looks_like_ts, parse_ts_file, parse_ts_str};

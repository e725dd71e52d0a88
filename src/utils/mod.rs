pub mod format;
pub mod storage;

pub use format::format_mxn;

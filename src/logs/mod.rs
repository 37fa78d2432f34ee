// Logs module - Pagination, formatting and output of exported entries

mod format;
mod paginator;
mod writer;

pub use format::{format_entry, truncate_timestamp};
pub use paginator::LogPaginator;
pub use writer::LogWriter;

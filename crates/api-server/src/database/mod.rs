mod pool;

pub use pool::{redacted_host, DbError, DbPool};

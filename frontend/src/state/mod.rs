pub mod lifetime;
pub mod refetch;
pub mod row_sync;
pub mod session;

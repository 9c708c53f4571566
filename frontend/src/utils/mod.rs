pub mod storage;
pub mod time;

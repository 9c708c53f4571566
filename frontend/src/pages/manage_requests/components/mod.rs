pub mod request_row;
pub mod requests_table;

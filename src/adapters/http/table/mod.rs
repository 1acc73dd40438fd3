//! HTTP adapter for tables and their QR codes.

mod dto;
mod handlers;
mod routes;

pub use dto::{BulkCreateTablesRequest, CreateTableRequest, TableResponse, UpdateTableRequest};
pub use handlers::{handle_table_error, TableHandlers};
pub use routes::table_routes;

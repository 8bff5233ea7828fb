pub mod file_upload;
pub mod header;
pub mod toast;
pub mod upload_area;
pub mod upload_results;
pub mod visit_table;

pub mod text_format;
pub mod file_io;
pub mod json_export;

pub mod u501_upload_files;
pub mod u502_process_data;

pub mod processing;
pub mod results_summary;
pub mod view;

pub use view::UploadFiles;

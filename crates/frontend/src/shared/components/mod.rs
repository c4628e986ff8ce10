pub mod card_animated;
pub mod file_dropzone;
pub mod property_selector;
pub mod stat_card;
pub mod table;

pub use card_animated::CardAnimated;
pub use file_dropzone::FileDropzone;
pub use property_selector::PropertySelector;
pub use stat_card::{StatCard, StatTone};

//! Вкладки приложения
//!
//! - `tab_bar` - панель переключения
//! - `page` - контент активной вкладки
//! - `registry` - маппинг вкладка → View
//! - `tab_labels` - заголовки и иконки

pub mod page;
pub mod registry;
pub mod tab_bar;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_bar::TabBar;

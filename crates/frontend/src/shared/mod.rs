pub mod api;
pub mod api_utils;
pub mod charts;
pub mod components;
pub mod config;
pub mod i18n;
pub mod list_utils;

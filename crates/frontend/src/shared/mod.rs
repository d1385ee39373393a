pub mod api_utils;
pub mod components;
pub mod config;
pub mod dialogs;
pub mod icons;
pub mod notifications;

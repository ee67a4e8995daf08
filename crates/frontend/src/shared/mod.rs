pub mod api_utils;
pub mod collection;
pub mod components;
pub mod icons;
pub mod list_controls;
pub mod list_utils;
pub mod period_tabs;
pub mod storage;

pub mod confirmation;
pub mod list_view;
pub mod load_state;
pub mod persisted_filters;
pub mod presentation;
pub mod sub_tabs;

pub mod delete_dialog;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod period_selector;
pub mod sub_tab_strip;

pub use delete_dialog::DeleteDialog;
pub use filter_panel::{FilterPanel, FilterSelect};
pub use page_header::{LoadStatus, PageHeader};
pub use pagination_controls::PaginationControls;
pub use period_selector::PeriodSelector;
pub use sub_tab_strip::SubTabStrip;

pub mod d100_content;
pub mod d101_students;
pub mod d102_my_tasks;
pub mod d103_department_tasks;
pub mod d104_leaves;
pub mod d105_timesheets;
pub mod d106_documents;
pub mod d107_users;
pub mod d108_api_endpoints;

pub use d100_content::ContentDashboard;
pub use d101_students::StudentsDashboard;
pub use d102_my_tasks::MyTasksDashboard;
pub use d103_department_tasks::DepartmentTasksDashboard;
pub use d104_leaves::LeavesDashboard;
pub use d105_timesheets::TimesheetsDashboard;
pub use d106_documents::DocumentsDashboard;
pub use d107_users::UsersDashboard;
pub use d108_api_endpoints::ApiEndpointsDashboard;

pub mod a001_student;
pub mod a002_task;
pub mod a003_leave;
pub mod a004_document;
pub mod a005_user;
pub mod a006_department;
pub mod a007_subject;
pub mod a008_timesheet;
pub mod a009_api_endpoint;

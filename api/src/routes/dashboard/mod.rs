pub mod dashboard_response;
pub mod parent_dashboard_route;
pub mod student_dashboard_route;

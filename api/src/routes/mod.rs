pub mod ask;
pub mod auth;
pub mod dashboard;
pub mod health_route;

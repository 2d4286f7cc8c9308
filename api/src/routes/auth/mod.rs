pub mod auth_request;
pub mod login_route;
pub mod logout_route;
pub mod signup_route;

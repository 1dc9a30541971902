pub mod admin_dashboard;
pub mod admin_login;
pub mod analysis;
pub mod intro;
pub mod quiz;
pub mod result;

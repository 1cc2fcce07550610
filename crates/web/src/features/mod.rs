pub mod athletes;
pub mod auth;
pub mod competitions;
pub mod enrollments;
pub mod health;
pub mod reports;
pub mod teams;
pub mod users;

pub mod athlete;
pub mod competition;
pub mod enrollment;
pub mod report;
pub mod team;
pub mod user;

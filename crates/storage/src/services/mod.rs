pub mod integrity;
pub mod registration;

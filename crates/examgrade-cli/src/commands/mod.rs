pub mod editions;
pub mod grade;
pub mod init;
pub mod saved;
pub mod validate;

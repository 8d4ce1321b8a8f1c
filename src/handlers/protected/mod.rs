pub mod teams;
pub mod tournaments;

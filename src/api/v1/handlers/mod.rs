pub mod health;
pub mod info;

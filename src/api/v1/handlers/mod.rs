pub mod admins;
pub mod health;

pub mod info;
pub mod push;
pub mod user;

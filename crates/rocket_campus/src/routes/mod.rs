pub mod account;
pub mod authors;
pub mod categories;
pub mod courses;
pub mod users;

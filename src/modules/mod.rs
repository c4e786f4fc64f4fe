pub mod auth;
pub mod classes;
pub mod lifecycle;
pub mod parents;
pub mod students;

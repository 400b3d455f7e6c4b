pub mod employee;
pub mod forecast;
pub mod place;

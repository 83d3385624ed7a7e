//! Database Models

pub mod employee;
pub mod token;
pub mod user;

pub use employee::{Employee, EmployeeInput, EmployeePayload, EmployeeResponse};
pub use token::AuthToken;
pub use user::{User, UserCreate};

//! Data models

mod department;
mod employee;
pub mod mapping;

pub use department::*;
pub use employee::*;
pub use mapping::{department_to_dto, employee_to_dto};

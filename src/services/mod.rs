//! Business logic services

pub mod department;
pub mod employee;

pub use department::DepartmentService;
pub use employee::EmployeeService;

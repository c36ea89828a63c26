pub mod department;
pub mod employee;

pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;

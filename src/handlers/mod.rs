pub mod department;
pub mod employee;

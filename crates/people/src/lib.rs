//! People domain module: customers and employees.

pub mod customer;
pub mod employee;

pub use customer::Customer;
pub use employee::Employee;

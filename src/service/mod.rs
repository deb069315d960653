//! StudentService: row-level operations against the students table.

mod crud;
pub use crud::StudentService;

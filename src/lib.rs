//! Student record service: REST CRUD over a PostgreSQL students table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod student;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use routes::{api_router, common_routes, student_routes};
pub use service::StudentService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_students_table};
pub use student::{NewStudent, Student, StudentUpdate};

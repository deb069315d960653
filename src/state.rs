//! Shared application state. The pool is passed to every handler explicitly.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

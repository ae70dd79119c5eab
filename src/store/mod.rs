//!
//! # Persistence stores
//!
//! Thin repository structs over the connection pool. Each store exposes the
//! plain create/find operations the handlers need; there is no custom query
//! logic beyond that. Stores are constructed once in `main` and handed to
//! handlers as shared application data.

pub mod todos;
pub mod users;

pub use todos::TodoStore;
pub use users::UserStore;

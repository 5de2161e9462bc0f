//! Database layer: connection pool and MySQL repositories.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::MySqlUserRepository;

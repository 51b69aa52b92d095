pub mod change_feed;
pub mod connection_pool;
pub mod sqlite_repository;

pub use change_feed::ChangeFeed;
pub use connection_pool::ConnectionPool;
pub use sqlite_repository::SqliteCatalogStore;

mod favorites;
mod products;
mod queries;
mod sellers;
mod users;

use super::change_feed::ChangeFeed;
use super::connection_pool::ConnectionPool;

/// SQLite-backed implementation of the local catalog store. One struct
/// implements all four repository ports; every committed write is announced
/// on the change feed.
pub struct SqliteCatalogStore {
    pool: ConnectionPool,
    changes: ChangeFeed,
}

impl SqliteCatalogStore {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            pool,
            changes: ChangeFeed::new(),
        }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn changes(&self) -> &ChangeFeed {
        &self.changes
    }
}

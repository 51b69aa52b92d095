pub mod favorite;
pub mod product;
pub mod seller;
pub mod user;

pub use favorite::Favorite;
pub use product::{Product, MAX_PRODUCT_IMAGES};
pub use seller::Seller;
pub use user::{User, UserRole};

use chrono::{DateTime, TimeZone, Utc};

/// Creation timestamps are persisted as epoch milliseconds, so entities are
/// born at millisecond precision to keep store round trips lossless.
pub(crate) fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    Utc.timestamp_millis_opt(now.timestamp_millis())
        .single()
        .unwrap_or(now)
}

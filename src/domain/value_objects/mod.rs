pub mod ids;

pub use ids::{ProductId, UserId};

pub mod categories;
pub mod error_code;
pub mod health;
pub mod helpers;
pub mod links;
pub mod routes;
pub mod stats;
pub mod types;

pub use error_code::ErrorCode;
pub use health::AppStartTime;
pub use routes::{api_routes, configure};

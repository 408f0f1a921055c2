mod error;
mod functions;
mod types;

pub use error::AuthError;
pub use functions::{bearer_token, parse_user_id};
pub use types::{Claims, UserId};

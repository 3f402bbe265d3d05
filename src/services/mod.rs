pub use auth::*;
pub use blob::*;
pub use token::*;

mod auth;
mod blob;
mod token;

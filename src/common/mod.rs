pub use errors::*;
pub use slug::*;

mod errors;
mod slug;

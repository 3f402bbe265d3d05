pub use about::*;
pub use admin::*;
pub use client::*;
pub use contact_message::*;
pub use highlight::*;
pub use industry::*;
pub use mission_vision::*;
pub use our_values::*;
pub use patch::*;
pub use product::*;
pub use product_category::*;
pub use service::*;
pub use slider::*;
pub use team_member::*;
pub use validate::*;
pub use why_choose_us::*;

mod about;
mod admin;
mod client;
mod contact_message;
mod highlight;
mod industry;
mod mission_vision;
mod our_values;
mod patch;
mod product;
mod product_category;
mod service;
mod slider;
mod team_member;
mod validate;
mod why_choose_us;

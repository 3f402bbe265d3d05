pub use admins::*;
pub use contact::*;
pub use db::*;
pub use products::*;
pub use resource::*;
pub use singleton::*;

mod admins;
mod clients;
mod contact;
mod db;
mod industries;
mod pages;
mod products;
mod resource;
mod services;
mod singleton;
mod sliders;
mod team;

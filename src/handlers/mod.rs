//! HTTP facade: stateless handlers translating requests to service calls.

pub mod home;
pub mod redirect;
pub mod shorten;

pub use home::home_handler;
pub use redirect::redirect_handler;
pub use shorten::{preflight_handler, shorten_handler};

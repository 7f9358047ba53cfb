//! Connection server: accept loop and the application handler seam.

pub mod handler;
pub mod listener;

pub use handler::Handler;
pub use listener::Server;

pub mod availability;
pub mod config;
pub mod export;
pub mod pattern;
pub mod response;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

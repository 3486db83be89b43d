mod client;
mod types;

pub use client::{TauClient, TAU_BASE_PATH};
pub use types::*;

mod client;

pub use client::{HelixClient, HELIX_BASE_PATH};

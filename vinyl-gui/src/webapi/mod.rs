mod client;

pub use client::{WebApi, BASE_URL};

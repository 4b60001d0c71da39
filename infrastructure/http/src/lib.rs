pub mod client;

pub use client::{DEFAULT_TIMEOUT, ReqwestHttpClient};

pub mod client;

pub use client::{FetchError, LookupConfig, RemoteLookup, RemoteSummaryClient};

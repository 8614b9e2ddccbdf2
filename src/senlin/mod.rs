mod client;
mod options;

pub use client::{SenlinClient, SenlinClientBuilder};
pub use options::ActionListOptions;

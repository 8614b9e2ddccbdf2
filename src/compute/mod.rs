mod client;
mod requests;

pub use client::{ComputeClient, ComputeClientBuilder};
pub use requests::{
    EvacuateOptions, EvacuateOptionsBuilder, NetworkRef, RebootType, ServerCreate,
    ServerCreateBuilder,
};

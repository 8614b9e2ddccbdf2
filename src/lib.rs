#![forbid(unsafe_code)]

mod build_url;
mod client_defaults;
mod common;
mod compute;
mod error;
mod models;
mod senlin;

pub use error::{ApiFault, Error};

pub use models::{Action, ActionStatus, Address, Addresses, Server, ServerPassword, ServerStatus};

pub use compute::{
    ComputeClient, ComputeClientBuilder, EvacuateOptions, EvacuateOptionsBuilder, NetworkRef,
    RebootType, ServerCreate, ServerCreateBuilder,
};

pub use senlin::{ActionListOptions, SenlinClient, SenlinClientBuilder};

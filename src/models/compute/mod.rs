mod server;

pub use server::{Address, Addresses, Server, ServerPassword, ServerStatus};

pub(crate) use server::{ConsoleOutput, ReservationId, ServerList, ServerWrapper};

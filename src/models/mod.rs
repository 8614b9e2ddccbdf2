mod compute;
mod senlin;

pub use compute::{Address, Addresses, Server, ServerPassword, ServerStatus};
pub use senlin::{Action, ActionStatus};

pub(crate) use compute::{ConsoleOutput, ReservationId, ServerList, ServerWrapper};
pub(crate) use senlin::{ActionList, ActionWrapper};

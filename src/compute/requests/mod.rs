mod server_actions;
mod server_create;

pub use server_actions::{EvacuateOptions, EvacuateOptionsBuilder, RebootType};
pub use server_create::{NetworkRef, ServerCreate, ServerCreateBuilder};

pub(crate) use server_actions::{ConsoleOutputAction, EvacuateAction, RebootAction};
pub(crate) use server_create::CreateServer;

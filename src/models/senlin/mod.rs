mod action;

pub use action::{Action, ActionStatus};

pub(crate) use action::{ActionList, ActionWrapper};

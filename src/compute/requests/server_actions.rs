use serde::Serialize;

/// Options for evacuating a server off a failed host. All fields are
/// optional; the scheduler picks a host when none is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvacuateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(rename = "adminPass", skip_serializing_if = "Option::is_none")]
    pub admin_pass: Option<String>,
    #[serde(rename = "onSharedStorage", skip_serializing_if = "Option::is_none")]
    pub on_shared_storage: Option<bool>,
}

impl EvacuateOptions {
    pub fn builder() -> EvacuateOptionsBuilder {
        EvacuateOptionsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EvacuateOptionsBuilder {
    options: EvacuateOptions,
}

impl EvacuateOptionsBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.options.host = Some(host.into());
        self
    }

    pub fn admin_pass(mut self, admin_pass: impl Into<String>) -> Self {
        self.options.admin_pass = Some(admin_pass.into());
        self
    }

    pub fn on_shared_storage(mut self, on_shared_storage: bool) -> Self {
        self.options.on_shared_storage = Some(on_shared_storage);
        self
    }

    pub fn build(self) -> EvacuateOptions {
        self.options
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RebootType {
    Soft,
    Hard,
}

/// `{"evacuate": {...}}` action body.
#[derive(Debug, Serialize)]
pub(crate) struct EvacuateAction<'a> {
    pub evacuate: &'a EvacuateOptions,
}

/// `{"reboot": {"type": "SOFT"|"HARD"}}` action body.
#[derive(Debug, Serialize)]
pub(crate) struct RebootAction {
    pub reboot: RebootBody,
}

#[derive(Debug, Serialize)]
pub(crate) struct RebootBody {
    #[serde(rename = "type")]
    pub reboot_type: RebootType,
}

impl RebootAction {
    pub fn new(reboot_type: RebootType) -> Self {
        Self {
            reboot: RebootBody { reboot_type },
        }
    }
}

/// `{"os-getConsoleOutput": {...}}` action body. A non-positive length
/// requests the full console and omits the field.
#[derive(Debug, Serialize)]
pub(crate) struct ConsoleOutputAction {
    #[serde(rename = "os-getConsoleOutput")]
    pub os_get_console_output: ConsoleOutputBody,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConsoleOutputBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
}

impl ConsoleOutputAction {
    pub fn new(length: i32) -> Self {
        Self {
            os_get_console_output: ConsoleOutputBody {
                length: (length > 0).then_some(length),
            },
        }
    }
}

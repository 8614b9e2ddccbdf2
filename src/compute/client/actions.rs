use super::ComputeClient;
use crate::compute::requests::{ConsoleOutputAction, EvacuateAction, RebootAction};
use crate::compute::{EvacuateOptions, RebootType};
use crate::error::Error;
use crate::models::{ConsoleOutput, ServerPassword};
use reqwest::StatusCode;

impl ComputeClient {
    /// Reboots a server.
    pub fn reboot_server(&self, id: &str, reboot_type: RebootType) -> Result<(), Error> {
        let url = self.build_url(&["servers", id, "action"])?;
        let req = self
            .apply_headers(self.http.post(url))
            .json(&RebootAction::new(reboot_type));
        let resp = req.send()?;
        self.expect_no_content(resp)
    }

    /// Evacuates a server off its (failed) host. The response carries the
    /// admin password assigned on the target host.
    pub fn evacuate_server(
        &self,
        id: &str,
        options: &EvacuateOptions,
    ) -> Result<ServerPassword, Error> {
        let url = self.build_url(&["servers", id, "action"])?;
        let req = self
            .apply_headers(self.http.post(url))
            .json(&EvacuateAction { evacuate: options });
        let resp = req.send()?;
        self.expect_success_json(resp)
    }

    /// Fetches the last `length` lines of the server console, or the full
    /// console when `length` is not positive.
    ///
    /// A 404 means no console output exists for that server and maps to
    /// `Ok(None)`; every other non-2xx status is an error.
    pub fn get_console_output(&self, id: &str, length: i32) -> Result<Option<String>, Error> {
        let url = self.build_url(&["servers", id, "action"])?;
        let req = self
            .apply_headers(self.http.post(url))
            .json(&ConsoleOutputAction::new(length));
        let resp = req.send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let console: ConsoleOutput = self.expect_success_json(resp)?;
        Ok(Some(console.output))
    }
}

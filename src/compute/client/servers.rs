use super::ComputeClient;
use crate::compute::requests::CreateServer;
use crate::compute::ServerCreate;
use crate::error::Error;
use crate::models::{ReservationId, Server, ServerList, ServerWrapper};

impl ComputeClient {
    /// Lists servers with full details.
    pub fn get_server_list(&self) -> Result<Vec<Server>, Error> {
        let url = self.build_url(&["servers", "detail"])?;
        let req = self.apply_headers(self.http.get(url));
        let resp = req.send()?;
        let list: ServerList = self.expect_success_json(resp)?;
        Ok(list.servers)
    }

    /// Retrieves a server by id.
    pub fn get_server(&self, id: &str) -> Result<Server, Error> {
        let url = self.build_url(&["servers", id])?;
        let req = self.apply_headers(self.http.get(url));
        let resp = req.send()?;
        let wrapper: ServerWrapper = self.expect_success_json(resp)?;
        Ok(wrapper.server)
    }

    /// Boots a new server from the given creation payload.
    pub fn boot_server(&self, create: &ServerCreate) -> Result<Server, Error> {
        let url = self.build_url(&["servers"])?;
        let req = self
            .apply_headers(self.http.post(url))
            .json(&CreateServer { server: create });
        let resp = req.send()?;
        let wrapper: ServerWrapper = self.expect_success_json(resp)?;
        Ok(wrapper.server)
    }

    /// Boots servers with deferred provisioning and returns the
    /// reservation id instead of server details. The outgoing payload
    /// carries `return_reservation_id: true`; the caller's value is left
    /// untouched.
    pub fn boot_server_and_return_reservation_id(
        &self,
        create: &ServerCreate,
    ) -> Result<String, Error> {
        let url = self.build_url(&["servers"])?;
        let payload = create.clone().with_return_reservation_id(true);
        let req = self
            .apply_headers(self.http.post(url))
            .json(&CreateServer { server: &payload });
        let resp = req.send()?;
        let reservation: ReservationId = self.expect_success_json(resp)?;
        Ok(reservation.reservation_id)
    }

    /// Deletes a server by id.
    pub fn delete_server(&self, id: &str) -> Result<(), Error> {
        let url = self.build_url(&["servers", id])?;
        let req = self.apply_headers(self.http.delete(url));
        let resp = req.send()?;
        self.expect_no_content(resp)
    }
}

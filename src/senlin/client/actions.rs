use super::SenlinClient;
use crate::common::apply_query_params;
use crate::error::Error;
use crate::models::{Action, ActionList, ActionWrapper};
use crate::senlin::ActionListOptions;

impl SenlinClient {
    /// Lists clustering actions using the provided query options.
    pub fn get_action_list(&self, options: &ActionListOptions) -> Result<Vec<Action>, Error> {
        let url = self.build_url(&["actions"])?;
        let mut req = self.http.get(url);
        req = apply_query_params(req, options.to_query_pairs());
        req = self.apply_headers(req);
        let resp = req.send()?;
        let list: ActionList = self.expect_success_json(resp)?;
        Ok(list.actions)
    }

    /// Retrieves a clustering action by id.
    pub fn get_action(&self, id: &str) -> Result<Action, Error> {
        let url = self.build_url(&["actions", id])?;
        let req = self.apply_headers(self.http.get(url));
        let resp = req.send()?;
        let wrapper: ActionWrapper = self.expect_success_json(resp)?;
        Ok(wrapper.action)
    }
}

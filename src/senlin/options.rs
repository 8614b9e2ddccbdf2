/// Query options for listing clustering actions.
#[derive(Debug, Clone, Default)]
pub struct ActionListOptions {
    pub limit: Option<i32>,
    pub marker: Option<String>,
    pub sort: Option<String>,
    pub global_project: Option<bool>,
    pub name: Option<String>,
    pub target: Option<String>,
    pub action: Option<String>,
    pub status: Option<String>,
}

impl ActionListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(ref marker) = self.marker {
            pairs.push(("marker", marker.clone()));
        }
        if let Some(ref sort) = self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(global_project) = self.global_project {
            pairs.push(("global_project", global_project.to_string()));
        }
        if let Some(ref name) = self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(ref target) = self.target {
            pairs.push(("target", target.clone()));
        }
        if let Some(ref action) = self.action {
            pairs.push(("action", action.clone()));
        }
        if let Some(ref status) = self.status {
            pairs.push(("status", status.clone()));
        }
        pairs
    }
}

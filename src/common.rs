use reqwest::blocking::RequestBuilder;

/// How a client authenticates each outgoing request.
///
/// OpenStack services take a pre-issued token in a header; issuing the
/// token (Keystone) is outside this crate.
pub(crate) enum AuthProvider {
    StaticHeader { header: String, value: String },
}

pub(crate) fn apply_auth(req: RequestBuilder, auth: &Option<AuthProvider>) -> RequestBuilder {
    match auth {
        None => req,
        Some(AuthProvider::StaticHeader { header, value }) => req.header(header, value),
    }
}

pub(crate) fn apply_query_params(
    req: RequestBuilder,
    params: Vec<(&'static str, String)>,
) -> RequestBuilder {
    if params.is_empty() {
        req
    } else {
        req.query(&params)
    }
}

use crate::build_url::{build_url, BuildUrlOptions};
use crate::client_defaults::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::common::{apply_auth, AuthProvider};
use crate::error::{
    parse_fault_from_body, read_body_with_limit, Error, CONFIG_ERROR_REDIRECT_WITH_AUTH,
    MAX_ERROR_BODY_BYTES,
};
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::Certificate;
use std::time::Duration;
use url::Url;

mod actions;
mod servers;

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
const API_VERSION_HEADER: &str = "X-OpenStack-Nova-API-Version";

pub struct ComputeClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    disable_redirect: bool,
    api_version: Option<String>,
    ca_certs: Vec<Certificate>,
    auth: Option<AuthProvider>,
}

impl ComputeClientBuilder {
    /// `base_url` points at the versioned compute endpoint, e.g.
    /// `https://nova.example:8774/v2.1`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            timeout: Some(DEFAULT_TIMEOUT),
            disable_redirect: false,
            api_version: None,
            ca_certs: Vec::new(),
            auth: None,
        })
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn disable_redirect(mut self, disable: bool) -> Self {
        self.disable_redirect = disable;
        self
    }

    /// Requests a compute API microversion on every call.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    /// Authenticates every request with a pre-issued token in
    /// `X-Auth-Token`. Requires `disable_redirect(true)`.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(AuthProvider::StaticHeader {
            header: AUTH_TOKEN_HEADER.to_string(),
            value: token.into(),
        });
        self
    }

    pub fn build(self) -> Result<ComputeClient, Error> {
        if self.auth.is_some() && !self.disable_redirect {
            return Err(Error::Config(CONFIG_ERROR_REDIRECT_WITH_AUTH.to_string()));
        }
        let mut builder = HttpClient::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.disable_redirect {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }
        for cert in self.ca_certs {
            builder = builder.add_root_certificate(cert);
        }
        let http = builder.build()?;
        Ok(ComputeClient {
            base_url: self.base_url,
            http,
            api_version: self.api_version,
            auth: self.auth,
        })
    }
}

/// Typed facade over the compute servers API. Stateless across calls;
/// every operation performs exactly one request and never retries.
pub struct ComputeClient {
    base_url: Url,
    http: HttpClient,
    api_version: Option<String>,
    auth: Option<AuthProvider>,
}

impl ComputeClient {
    pub fn builder(base_url: impl AsRef<str>) -> Result<ComputeClientBuilder, Error> {
        ComputeClientBuilder::new(base_url)
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        build_url(&self.base_url, segments, BuildUrlOptions::CLIENT)
    }

    fn apply_headers(&self, mut req: RequestBuilder) -> RequestBuilder {
        if let Some(ref version) = self.api_version {
            req = req.header(API_VERSION_HEADER, version);
        }
        apply_auth(req, &self.auth)
    }

    fn expect_success_json<T: serde::de::DeserializeOwned>(
        &self,
        mut resp: Response,
    ) -> Result<T, Error> {
        if resp.status().is_success() {
            let mut body = Vec::new();
            resp.copy_to(&mut body)?;
            serde_json::from_slice(&body).map_err(Error::from)
        } else {
            self.parse_error(resp)
        }
    }

    fn expect_no_content(&self, resp: Response) -> Result<(), Error> {
        if resp.status().is_success() {
            Ok(())
        } else {
            self.parse_error(resp)
        }
    }

    fn parse_error<T>(&self, mut resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let body = read_body_with_limit(&mut resp, MAX_ERROR_BODY_BYTES)?;
        Err(parse_fault_from_body(status, &body))
    }
}

#[cfg(test)]
mod tests;

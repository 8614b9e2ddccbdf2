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

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

pub struct SenlinClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    disable_redirect: bool,
    ca_certs: Vec<Certificate>,
    auth: Option<AuthProvider>,
}

impl SenlinClientBuilder {
    /// `base_url` points at the versioned clustering endpoint, e.g.
    /// `https://senlin.example:8778/v1`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            timeout: Some(DEFAULT_TIMEOUT),
            disable_redirect: false,
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

    pub fn build(self) -> Result<SenlinClient, Error> {
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
        Ok(SenlinClient {
            base_url: self.base_url,
            http,
            auth: self.auth,
        })
    }
}

/// Typed facade over the clustering (Senlin) API.
pub struct SenlinClient {
    base_url: Url,
    http: HttpClient,
    auth: Option<AuthProvider>,
}

impl SenlinClient {
    pub fn builder(base_url: impl AsRef<str>) -> Result<SenlinClientBuilder, Error> {
        SenlinClientBuilder::new(base_url)
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        build_url(&self.base_url, segments, BuildUrlOptions::CLIENT)
    }

    fn apply_headers(&self, req: RequestBuilder) -> RequestBuilder {
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

    fn parse_error<T>(&self, mut resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let body = read_body_with_limit(&mut resp, MAX_ERROR_BODY_BYTES)?;
        Err(parse_fault_from_body(status, &body))
    }
}

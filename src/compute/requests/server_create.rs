use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;

/// Reference to a network the new server attaches to. Exactly one of the
/// fields is normally set; `uuid` for a network id, `port` for a
/// pre-created port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_ip: Option<String>,
}

impl NetworkRef {
    pub fn network(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            port: None,
            fixed_ip: None,
        }
    }

    pub fn port(port: impl Into<String>) -> Self {
        Self {
            uuid: None,
            port: Some(port.into()),
            fixed_ip: None,
        }
    }
}

/// Frozen server-creation payload.
///
/// Built once via [`ServerCreate::builder`]; serialization omits unset
/// optional fields, and the counts always serialize as JSON integers.
/// Field declaration order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerCreate {
    name: String,
    #[serde(rename = "imageRef", skip_serializing_if = "Option::is_none")]
    image_ref: Option<String>,
    #[serde(rename = "flavorRef", skip_serializing_if = "Option::is_none")]
    flavor_ref: Option<String>,
    min_count: i32,
    max_count: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    networks: Vec<NetworkRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config_drive: Option<bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_data: Option<String>,
    #[serde(rename = "adminPass", skip_serializing_if = "Option::is_none")]
    admin_pass: Option<String>,
    // Absent means the contract default, false. Stamped true only by the
    // reservation-returning boot path.
    #[serde(skip_serializing_if = "Option::is_none")]
    return_reservation_id: Option<bool>,
}

impl ServerCreate {
    pub fn builder() -> ServerCreateBuilder {
        ServerCreateBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn with_return_reservation_id(mut self, value: bool) -> Self {
        self.return_reservation_id = Some(value);
        self
    }
}

/// Outgoing body envelope: `{"server": {...}}`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateServer<'a> {
    pub server: &'a ServerCreate,
}

#[derive(Debug, Clone, Default)]
pub struct ServerCreateBuilder {
    name: Option<String>,
    image_ref: Option<String>,
    flavor_ref: Option<String>,
    min_count: Option<i32>,
    max_count: Option<i32>,
    networks: Vec<NetworkRef>,
    config_drive: Option<bool>,
    metadata: BTreeMap<String, String>,
    key_name: Option<String>,
    availability_zone: Option<String>,
    user_data: Option<String>,
    admin_pass: Option<String>,
}

impl ServerCreateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn flavor_ref(mut self, flavor_ref: impl Into<String>) -> Self {
        self.flavor_ref = Some(flavor_ref.into());
        self
    }

    pub fn min_count(mut self, min_count: i32) -> Self {
        self.min_count = Some(min_count);
        self
    }

    pub fn max_count(mut self, max_count: i32) -> Self {
        self.max_count = Some(max_count);
        self
    }

    /// Attaches the server to the given network ids.
    pub fn networks<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.networks = ids.into_iter().map(NetworkRef::network).collect();
        self
    }

    pub fn add_network(mut self, network: NetworkRef) -> Self {
        self.networks.push(network);
        self
    }

    pub fn config_drive(mut self, config_drive: bool) -> Self {
        self.config_drive = Some(config_drive);
        self
    }

    pub fn add_metadata_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = Some(key_name.into());
        self
    }

    pub fn availability_zone(mut self, availability_zone: impl Into<String>) -> Self {
        self.availability_zone = Some(availability_zone.into());
        self
    }

    pub fn user_data(mut self, user_data: impl Into<String>) -> Self {
        self.user_data = Some(user_data.into());
        self
    }

    pub fn admin_pass(mut self, admin_pass: impl Into<String>) -> Self {
        self.admin_pass = Some(admin_pass.into());
        self
    }

    /// Freezes the payload. Fails before any network interaction when the
    /// required name is missing or the instance counts are inconsistent.
    pub fn build(self) -> Result<ServerCreate, Error> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(Error::Builder("server name is required".to_string())),
        };
        let min_count = self.min_count.unwrap_or(1);
        let max_count = self.max_count.unwrap_or(min_count);
        if min_count < 1 {
            return Err(Error::Builder("min_count must be at least 1".to_string()));
        }
        if max_count < min_count {
            return Err(Error::Builder(
                "max_count must be greater than or equal to min_count".to_string(),
            ));
        }
        Ok(ServerCreate {
            name,
            image_ref: self.image_ref,
            flavor_ref: self.flavor_ref,
            min_count,
            max_count,
            networks: self.networks,
            config_drive: self.config_drive,
            metadata: self.metadata,
            key_name: self.key_name,
            availability_zone: self.availability_zone,
            user_data: self.user_data,
            admin_pass: self.admin_pass,
            return_reservation_id: None,
        })
    }
}

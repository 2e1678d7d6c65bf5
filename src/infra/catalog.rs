//! Read-only reference catalog: container types and ports, parsed once from
//! the embedded tables at startup and shared immutably afterwards.

use std::cmp::Ordering;

use thiserror::Error;

use crate::domain::{ContainerType, Port};
use crate::util::assets;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {table} reference table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid container {code}: {reason}")]
    InvalidContainer { code: String, reason: &'static str },
}

#[derive(Debug)]
pub struct ReferenceCatalog {
    containers: Vec<ContainerType>,
    ports: Vec<Port>,
}

impl ReferenceCatalog {
    /// Parse and validate the embedded reference tables.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_json(assets::containers_json(), assets::ports_json())
    }

    fn from_json(containers_json: &str, ports_json: &str) -> Result<Self, CatalogError> {
        let mut containers: Vec<ContainerType> =
            serde_json::from_str(containers_json).map_err(|source| CatalogError::Parse {
                table: "container",
                source,
            })?;
        let ports: Vec<Port> =
            serde_json::from_str(ports_json).map_err(|source| CatalogError::Parse {
                table: "port",
                source,
            })?;

        for container in &containers {
            if container.volume_capacity_cbm <= 0.0 {
                return Err(CatalogError::InvalidContainer {
                    code: container.code.clone(),
                    reason: "volume capacity must be positive",
                });
            }
            if container.max_weight_kg <= 0.0 {
                return Err(CatalogError::InvalidContainer {
                    code: container.code.clone(),
                    reason: "max weight must be positive",
                });
            }
        }

        // The fitting engine picks the first adequate container, so keep the
        // table sorted smallest-first.
        containers.sort_by(|a, b| {
            a.volume_capacity_cbm
                .partial_cmp(&b.volume_capacity_cbm)
                .unwrap_or(Ordering::Equal)
        });

        Ok(Self { containers, ports })
    }

    /// Container types sorted ascending by volume capacity.
    pub fn containers(&self) -> &[ContainerType] {
        &self.containers
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn find_port(&self, code: &str) -> Option<&Port> {
        self.ports
            .iter()
            .find(|port| port.code.eq_ignore_ascii_case(code))
    }
}

use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::domain::asset::AssetRef;

/// The request document POSTed to the run endpoint.
#[derive(Debug, Serialize)]
pub struct RunDocument {
    pub case: CaseRef,
    pub asset: AssetRef,
    pub result: ResultName,
    pub properties: RunProperties,
}

impl RunDocument {
    pub fn new(test_case_key: &str, asset_identifier: &str, result_label: &str, config: &RunConfig) -> Self {
        Self {
            case: CaseRef {
                key: test_case_key.to_string(),
            },
            asset: AssetRef::classify(asset_identifier),
            result: ResultName {
                name: result_label.to_string(),
            },
            properties: RunProperties::from_config(config),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CaseRef {
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct ResultName {
    pub name: String,
}

/// Contextual labels attached to a run. Each entry is present only when its
/// configured name trims to non-empty; the object itself is always sent,
/// even when empty.
#[derive(Debug, Default, Serialize)]
pub struct RunProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint: Option<PropertyName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<PropertyName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<PropertyName>,
}

impl RunProperties {
    pub fn from_config(config: &RunConfig) -> Self {
        Self {
            sprint: PropertyName::non_empty(&config.sprint_name),
            release: PropertyName::non_empty(&config.release_name),
            environment: PropertyName::non_empty(&config.environment_name),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyName {
    pub name: String,
}

impl PropertyName {
    fn non_empty(name: &str) -> Option<Self> {
        if name.trim().is_empty() {
            None
        } else {
            Some(Self {
                name: name.to_string(),
            })
        }
    }
}

/// The only field of the service response the reporter inspects.
#[derive(Debug, Deserialize)]
pub struct ServiceResponse {
    pub message: String,
}

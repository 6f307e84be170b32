use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use super::api_response::ApiResponse;

/// Response to fetching a single asset with its full detail record.
pub type Asset = ApiResponse<AssetDetails>;

/// Response to the address-based lookup, which returns only the flat
/// asset record without attributes or addresses.
pub type AssetSummary = ApiResponse<AssetCommon>;

/// Response to listing the addresses assigned to an asset.
pub type AssetAddresses = ApiResponse<AddressPage>;

/// Response to an asset search.
pub type AssetResults = ApiResponse<AssetPage>;

/// Core identity and lifecycle fields shared by every asset record.
///
/// Lifecycle timestamps are opaque strings; Collins formats them server-side
/// and the client does not interpret them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetCommon {
    /// Numeric asset ID.
    #[serde(rename = "ID", default)]
    pub id: i64,

    /// Unique human-readable asset identifier.
    #[serde(rename = "TAG", default)]
    pub tag: String,

    /// Machine-state record, when the asset carries one.
    #[serde(rename = "STATE", default)]
    pub state: AssetState,

    /// Status name, e.g. "Allocated" or "Maintenance".
    #[serde(rename = "STATUS", default)]
    pub status: String,

    /// Asset type name, e.g. "SERVER_NODE".
    #[serde(rename = "TYPE", default)]
    pub asset_type: String,

    #[serde(rename = "CREATED", default)]
    pub created: String,

    #[serde(rename = "UPDATED", default)]
    pub updated: String,

    #[serde(rename = "DELETED", default)]
    pub deleted: String,
}

impl fmt::Display for AssetCommon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.tag, self.status)
    }
}

/// Fine-grained state attached to an asset, e.g. "Running" or "Provisioning".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetState {
    #[serde(rename = "ID", default)]
    pub id: i64,

    /// The status this state belongs to.
    #[serde(rename = "STATUS", default)]
    pub status: StatusRef,

    #[serde(rename = "NAME", default)]
    pub name: String,

    #[serde(rename = "LABEL", default)]
    pub label: String,

    #[serde(rename = "DESCRIPTION", default)]
    pub description: String,
}

/// Name/description pair referencing a status record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusRef {
    #[serde(rename = "NAME", default)]
    pub name: String,

    #[serde(rename = "DESCRIPTION", default)]
    pub description: String,
}

/// Full detail record for an asset.
///
/// The attribute mapping is free-form and grouped by dimension ("0", "1", ...);
/// interpreting individual attributes is left to the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetDetails {
    #[serde(rename = "ASSET", default)]
    pub asset: AssetCommon,

    #[serde(rename = "ATTRIBS", default)]
    pub attributes: HashMap<String, HashMap<String, String>>,

    #[serde(rename = "IPMI", default)]
    pub ipmi: IpmiInfo,

    #[serde(rename = "ADDRESSES", default)]
    pub addresses: Vec<AssetAddress>,
}

/// Out-of-band management credentials stored per asset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpmiInfo {
    #[serde(rename = "IPMI_ADDRESS", default)]
    pub address: String,

    #[serde(rename = "IPMI_USERNAME", default)]
    pub username: String,

    #[serde(rename = "IPMI_PASSWORD", default)]
    pub password: String,
}

/// A network address assigned to an asset from an address pool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetAddress {
    #[serde(rename = "ID", default)]
    pub id: i64,

    #[serde(rename = "POOL", default)]
    pub pool: String,

    #[serde(rename = "ADDRESS", default)]
    pub address: String,

    #[serde(rename = "NETMASK", default)]
    pub netmask: String,

    #[serde(rename = "GATEWAY", default)]
    pub gateway: String,
}

impl fmt::Display for AssetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.address, self.pool)
    }
}

/// Payload of the address-list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressPage {
    #[serde(rename = "ADDRESSES", default)]
    pub addresses: Vec<AssetAddress>,
}

/// Payload of the search endpoint: one page of matching assets.
///
/// Collins servers have emitted the list under both "Data" and "data"; accept
/// either spelling.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetPage {
    #[serde(rename = "Data", alias = "data", default)]
    pub assets: Vec<AssetDetails>,
}

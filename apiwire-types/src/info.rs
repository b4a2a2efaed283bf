//! Plain string results

use crate::args::StringArgs;
use serde::{Deserialize, Serialize};

/// Identity of a node known to the gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub host_name: String,
    pub url: String,
    /// Genesis block hash as reported by the node
    pub genesis: String,
}

/// A channel served by the gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    pub name: String,
    pub channel_id: String,
}

/// Result of the echo endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEcho {
    pub value: String,
}

impl ResultEcho {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl From<StringArgs> for ResultEcho {
    fn from(args: StringArgs) -> Self {
        Self { value: args.from }
    }
}

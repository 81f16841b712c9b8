//! Application Security Group data model.

use crate::error::AsgError;
use serde::Deserialize;

/// Index of the resource group name in `id.split('/')`.
///
/// `/subscriptions/<sub>/resourceGroups/<rg>/providers/...` splits into
/// `["", "subscriptions", "<sub>", "resourceGroups", "<rg>", ...]`.
const RESOURCE_GROUP_SEGMENT: usize = 4;

/// ASG as returned by the ARM listing, only the fields we need.
#[derive(Deserialize, Debug, Clone)]
pub struct RawAsg {
    /// Fully qualified resource id.
    pub id: String,
    pub name: String,
}

/// Normalized ASG record written to the Terraform fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asg {
    pub asg_name: String,
    pub resource_group_name: String,
}

impl Asg {
    pub fn new(asg_name: &str, resource_group_name: &str) -> Asg {
        Asg {
            asg_name: asg_name.to_string(),
            resource_group_name: resource_group_name.to_string(),
        }
    }
}

/// Extract the owning resource group from a resource id.
pub fn resource_group_from_id(id: &str) -> Result<&str, AsgError> {
    id.split('/')
        .nth(RESOURCE_GROUP_SEGMENT)
        .ok_or_else(|| AsgError::MalformedRecord { id: id.to_string() })
}

impl TryFrom<RawAsg> for Asg {
    type Error = AsgError;

    fn try_from(raw: RawAsg) -> Result<Self, Self::Error> {
        let resource_group_name = resource_group_from_id(&raw.id)?.to_string();
        Ok(Asg {
            asg_name: raw.name,
            resource_group_name,
        })
    }
}

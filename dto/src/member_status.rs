use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Membership status as exported by the club-management platform.
/// Unknown values are kept verbatim so they survive a round trip to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemberStatus {
    #[default]
    New,
    Active,
    Expired,
    Dropped,
    Trial,
    Frozen,
    Pending,
    Other(String),
}

impl MemberStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MemberStatus::New => "New",
            MemberStatus::Active => "Active",
            MemberStatus::Expired => "Expired",
            MemberStatus::Dropped => "Dropped",
            MemberStatus::Trial => "Trial",
            MemberStatus::Frozen => "Frozen",
            MemberStatus::Pending => "Pending",
            MemberStatus::Other(status) => status,
        }
    }
}

impl From<&str> for MemberStatus {
    fn from(value: &str) -> Self {
        match value {
            "New" => MemberStatus::New,
            "Active" => MemberStatus::Active,
            "Expired" => MemberStatus::Expired,
            "Dropped" => MemberStatus::Dropped,
            "Trial" => MemberStatus::Trial,
            "Frozen" => MemberStatus::Frozen,
            "Pending" => MemberStatus::Pending,
            other => MemberStatus::Other(other.to_owned()),
        }
    }
}

impl From<String> for MemberStatus {
    fn from(value: String) -> Self {
        MemberStatus::from(value.as_str())
    }
}

impl From<MemberStatus> for String {
    fn from(value: MemberStatus) -> Self {
        value.as_str().to_owned()
    }
}

impl Display for MemberStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An alternate identity (first name, last name, email) pointing at a roster member.
/// Several aliases can point at the same member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MemberAlias {
    first_name: String,
    last_name: String,
    email: String,
}

impl MemberAlias {
    pub fn new(first_name: String, last_name: String, email: String) -> Self {
        Self {
            first_name,
            last_name,
            email,
        }
    }
}

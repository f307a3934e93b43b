use crate::member_status::MemberStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Address and phone details. Carried along on insert, never used for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ContactDetails {
    #[serde(rename = "address1")]
    address: String,
    #[serde(rename = "address2")]
    addr_ext: String,
    city: String,
    state: String,
    zip: String,
    #[serde(rename = "cellPhone")]
    mobile: String,
    phone: String,
}

impl ContactDetails {
    pub fn new(
        address: String,
        addr_ext: String,
        city: String,
        state: String,
        zip: String,
        mobile: String,
        phone: String,
    ) -> Self {
        Self {
            address,
            addr_ext,
            city,
            state,
            zip,
            mobile,
            phone,
        }
    }
}

/// One row of the club roster.
///
/// Field names follow the club-management platform's active member export, so a feed record
/// deserializes straight into a [RosterMember].
/// Dates are kept as text: a malformed date must never prevent a row from being loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct RosterMember {
    #[serde(rename = "memberNumber")]
    num: String,
    active: bool,
    #[serde(rename = "loginName")]
    login: String,
    #[serde(rename = "firstName")]
    first_name: String,
    #[serde(rename = "middleInitial")]
    middle: String,
    #[serde(rename = "lastName")]
    last_name: String,
    email: String,
    status: MemberStatus,
    joined: String,
    expired: String,
    #[serde(flatten)]
    contact: ContactDetails,
}

impl RosterMember {
    pub fn new(
        num: String,
        first_name: String,
        last_name: String,
        email: String,
        status: MemberStatus,
        expired: String,
    ) -> Self {
        Self {
            num,
            active: true,
            first_name,
            last_name,
            email,
            status,
            expired,
            ..Default::default()
        }
    }

    pub fn with_details(
        mut self,
        login: String,
        middle: String,
        joined: String,
        contact: ContactDetails,
    ) -> Self {
        self.login = login;
        self.middle = middle;
        self.joined = joined;
        self.contact = contact;
        self
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_status(&mut self, status: MemberStatus) {
        self.status = status;
    }

    pub fn set_expired(&mut self, expired: String) {
        self.expired = expired;
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn dave_scott() -> RosterMember {
        RosterMember::new(
            "1".to_owned(),
            "Dave".to_owned(),
            "Scott".to_owned(),
            "d@x.com".to_owned(),
            MemberStatus::Active,
            "2025-12-31".to_owned(),
        )
    }

    pub fn dave_smith() -> RosterMember {
        RosterMember::new(
            "2".to_owned(),
            "Dave".to_owned(),
            "Smith".to_owned(),
            "dave.smith@x.com".to_owned(),
            MemberStatus::Expired,
            "2023-12-31".to_owned(),
        )
    }

    pub fn jonette_snow() -> RosterMember {
        RosterMember::new(
            "3".to_owned(),
            "Jonette".to_owned(),
            "Snow".to_owned(),
            "jonette.snow@x.com".to_owned(),
            MemberStatus::Trial,
            "2024-06-30".to_owned(),
        )
    }

    pub fn jon_doe_without_expiration() -> RosterMember {
        RosterMember::new(
            "4".to_owned(),
            "Jon".to_owned(),
            "Doe".to_owned(),
            "jon.doe@x.com".to_owned(),
            MemberStatus::Expired,
            "someday".to_owned(),
        )
    }

}

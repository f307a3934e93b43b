use derive_getters::Getters;
use std::fmt::{Display, Formatter};

/// A user of the team-chat workspace directory.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ChatWorkspaceUser {
    first_name: String,
    last_name: String,
    email: String,
    /// False for bot and app accounts.
    email_confirmed: bool,
}

impl ChatWorkspaceUser {
    pub fn new(first_name: String, last_name: String, email: String, email_confirmed: bool) -> Self {
        Self {
            first_name,
            last_name,
            email,
            email_confirmed,
        }
    }
}

/// A member of the fitness-tracking club.
/// The platform only ever exposes the initial of the last name.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FitnessClubAthlete {
    first_name: String,
    last_name: String,
}

impl FitnessClubAthlete {
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            first_name,
            last_name,
        }
    }
}

/// An external record to check against the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    ChatWorkspace(ChatWorkspaceUser),
    FitnessClub(FitnessClubAthlete),
}

impl Candidate {
    pub fn first_name(&self) -> &str {
        match self {
            Candidate::ChatWorkspace(user) => user.first_name(),
            Candidate::FitnessClub(athlete) => athlete.first_name(),
        }
    }

    pub fn last_name(&self) -> &str {
        match self {
            Candidate::ChatWorkspace(user) => user.last_name(),
            Candidate::FitnessClub(athlete) => athlete.last_name(),
        }
    }

    /// Sort candidates alphabetically by first name, ignoring case.
    pub fn sort_by_first_name(candidates: &mut [Candidate]) {
        candidates.sort_by_key(|candidate| candidate.first_name().to_lowercase());
    }
}

impl From<ChatWorkspaceUser> for Candidate {
    fn from(value: ChatWorkspaceUser) -> Self {
        Candidate::ChatWorkspace(value)
    }
}

impl From<FitnessClubAthlete> for Candidate {
    fn from(value: FitnessClubAthlete) -> Self {
        Candidate::FitnessClub(value)
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Candidate::ChatWorkspace(user) => write!(
                f,
                "{} {} ({})",
                user.first_name, user.last_name, user.email
            ),
            Candidate::FitnessClub(athlete) => {
                write!(f, "{} {}", athlete.first_name, athlete.last_name)
            }
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn chat_user(first_name: &str, last_name: &str, email: &str) -> Candidate {
        ChatWorkspaceUser::new(
            first_name.to_owned(),
            last_name.to_owned(),
            email.to_owned(),
            true,
        )
        .into()
    }

    pub fn athlete(first_name: &str, last_name: &str) -> Candidate {
        FitnessClubAthlete::new(first_name.to_owned(), last_name.to_owned()).into()
    }


}

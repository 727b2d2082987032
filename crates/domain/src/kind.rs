//! Entity kinds and the collection each one is stored in.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownKindError;

/// The four record kinds served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Provider,
    Service,
    ServiceRequest,
    Review,
}

impl EntityKind {
    /// Every supported kind.
    pub const ALL: [Self; 4] = [
        Self::Provider,
        Self::Service,
        Self::ServiceRequest,
        Self::Review,
    ];

    /// Kind name as written in the data model.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Provider => "Provider",
            Self::Service => "Service",
            Self::ServiceRequest => "ServiceRequest",
            Self::Review => "Review",
        }
    }

    /// Collection holding records of this kind: the lowercase kind name.
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Service => "service",
            Self::ServiceRequest => "servicerequest",
            Self::Review => "review",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKindError(s.to_owned()))
    }
}

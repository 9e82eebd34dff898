//! Contact-lookup categories

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// What kind of contact a reputation lookup is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactCategory {
    Phone,
    Email,
    Company,
    Website,
}

impl ContactCategory {
    /// Japanese label used in the lookup instruction text
    #[must_use]
    pub const fn label_ja(&self) -> &'static str {
        match self {
            Self::Phone => "電話番号",
            Self::Email => "メールアドレス",
            Self::Company => "会社名",
            Self::Website => "ウェブサイト",
        }
    }
}

impl fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Company => "company",
            Self::Website => "website",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ContactCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "company" => Ok(Self::Company),
            "website" => Ok(Self::Website),
            other => Err(DomainError::UnknownContactCategory(other.to_string())),
        }
    }
}

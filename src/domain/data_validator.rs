//! Server-side data validator catalog
//!
//! The references are the identifiers of validators pre-registered on the
//! document service. The catalog is versioned with that service: entries must
//! not be reordered, renamed, or regenerated.

use crate::error::SigtagError;

/// A pre-registered data-format validator for text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataValidator {
    DdMmYyyy,
    DateAndTime,
    DdMonYyyy,
    TimeOnly,
    DdMmYy,
    MmmDdYyyy,
    DateOnly,
    Numeric,
    UsPhoneNumber,
    UsCurrency,
    UsZip,
    Age,
    PositiveInt,
    PosNegInt,
    UsState,
    Alphanumeric,
    Email,
}

impl DataValidator {
    /// Every catalog entry, in catalog order
    pub const ALL: [DataValidator; 17] = [
        DataValidator::DdMmYyyy,
        DataValidator::DateAndTime,
        DataValidator::DdMonYyyy,
        DataValidator::TimeOnly,
        DataValidator::DdMmYy,
        DataValidator::MmmDdYyyy,
        DataValidator::DateOnly,
        DataValidator::Numeric,
        DataValidator::UsPhoneNumber,
        DataValidator::UsCurrency,
        DataValidator::UsZip,
        DataValidator::Age,
        DataValidator::PositiveInt,
        DataValidator::PosNegInt,
        DataValidator::UsState,
        DataValidator::Alphanumeric,
        DataValidator::Email,
    ];

    /// The opaque reference string embedded in tags
    pub fn reference(&self) -> &'static str {
        match self {
            DataValidator::DdMmYyyy => "059b068ef8ee5cc27e09ba79af58f9e805b7c2b3",
            DataValidator::DateAndTime => "06448a0d0eb6a71c7c116ec4754bcb04ebf11da5",
            DataValidator::DdMonYyyy => "07c1e60f3da1192b60aca6f7e72d9b17a44539e5",
            DataValidator::TimeOnly => "09d3bb6a5eb6598edb7bfad02b0143d8c68ad788",
            DataValidator::DdMmYy => "0b61eb6a696da953910f195b30c86e5131f3ae3e",
            DataValidator::MmmDdYyyy => "0f4827a308018f98b11ae3923104685ff0c03070",
            DataValidator::DateOnly => "13435fa6c2a17f83177fcbb5c4a9376ce85befeb",
            DataValidator::Numeric => "1109cfbbb06311a06a4c7f8d04f1f0d5c44103cb",
            DataValidator::UsPhoneNumber => "13cc1d661da456d27b249b73056ed4d1f2e72d8e",
            DataValidator::UsCurrency => "150662c7221a6a6ebcbb7c50ca46359d19757f81",
            DataValidator::UsZip => "1671f4eb87444a24e1e00f149bade8b7cf3af5da",
            DataValidator::Age => "1a203fa91791b0458608be045a454ba90557fb26",
            DataValidator::PositiveInt => "1f9486ae822d30ba3df2cb8e65303ebfb8c803e8",
            DataValidator::PosNegInt => "23a57c29fa089e22bcf85d601c8091bc9c7da570",
            DataValidator::UsState => "3123849de563f9e14acacc2739467e3d30e426b6",
            DataValidator::Alphanumeric => "3859296fffd39cb8efeaffda5899973c014ce42e",
            DataValidator::Email => "7cd795fd64ce63b670b52b2e83457d59ac796a39",
        }
    }

    /// The catalog name, as listed by `sigtag validators`
    pub fn name(&self) -> &'static str {
        match self {
            DataValidator::DdMmYyyy => "DD_MM_YYYY",
            DataValidator::DateAndTime => "DATE_AND_TIME",
            DataValidator::DdMonYyyy => "DD_MON_YYYY",
            DataValidator::TimeOnly => "TIME_ONLY",
            DataValidator::DdMmYy => "DD_MM_YY",
            DataValidator::MmmDdYyyy => "MMM_DD_YYYY",
            DataValidator::DateOnly => "DATE_ONLY",
            DataValidator::Numeric => "NUMERIC",
            DataValidator::UsPhoneNumber => "US_PHONE_NUMBER",
            DataValidator::UsCurrency => "US_CURRENCY",
            DataValidator::UsZip => "US_ZIP",
            DataValidator::Age => "AGE",
            DataValidator::PositiveInt => "POSITIVE_INT",
            DataValidator::PosNegInt => "POS_NEG_INT",
            DataValidator::UsState => "US_STATE",
            DataValidator::Alphanumeric => "ALPHANUMERIC",
            DataValidator::Email => "EMAIL",
        }
    }

    /// Look up a validator by its reference string (exact match)
    pub fn from_reference(reference: &str) -> Result<Self, SigtagError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.reference() == reference)
            .ok_or_else(|| SigtagError::InvalidArgument("invalid validator".to_string()))
    }

    /// Look up a validator by its catalog name (exact match)
    pub fn from_name(name: &str) -> Result<Self, SigtagError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name() == name)
            .ok_or_else(|| SigtagError::InvalidArgument("invalid validator".to_string()))
    }

    /// Resolve user input that may be a reference string or a catalog name
    pub fn resolve(input: &str) -> Result<Self, SigtagError> {
        Self::from_reference(input).or_else(|_| Self::from_name(input))
    }
}

use std::sync::LazyLock;

use regex::Regex;

use super::errors::PriceValidationError;

static CURRENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("currency pattern is valid"));

/// Catalog identifier of a product. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(id: i32) -> Result<Self, PriceValidationError> {
        if id <= 0 {
            return Err(PriceValidationError::ProductIdNotPositive);
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the brand (chain) a price belongs to. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrandId(i32);

impl BrandId {
    pub fn new(id: i32) -> Result<Self, PriceValidationError> {
        if id <= 0 {
            return Err(PriceValidationError::BrandIdNotPositive);
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for BrandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tariff a price was published under. Opaque: never used for matching, only
/// returned and used as the final ordering key between equal priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PriceListId(i32);

impl PriceListId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for PriceListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PriceListId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// ISO 4217 currency code (e.g. `EUR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Result<Self, PriceValidationError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(PriceValidationError::CurrencyBlank);
        }
        if !CURRENCY_CODE.is_match(&code) {
            return Err(PriceValidationError::CurrencyInvalid);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Currency {
    type Err = PriceValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

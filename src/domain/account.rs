use crate::domain::payment::PaymentScheme;
use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, BitOr, Sub, SubAssign};
use std::str::FromStr;

/// Represents a signed monetary value.
///
/// This is a wrapper around `rust_decimal::Decimal`. Unlike a transaction
/// amount it is allowed to go negative: only the Faster Payments rule refuses
/// to overdraw an account.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Balance {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Set of payment schemes an account may be debited through.
///
/// Stored as a bitmask; rendered as `bacs|faster_payments|chaps` in text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllowedPaymentSchemes(u8);

impl AllowedPaymentSchemes {
    const fn bit(scheme: PaymentScheme) -> u8 {
        match scheme {
            PaymentScheme::Bacs => 1 << 0,
            PaymentScheme::FasterPayments => 1 << 1,
            PaymentScheme::Chaps => 1 << 2,
        }
    }

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(
            Self::bit(PaymentScheme::Bacs)
                | Self::bit(PaymentScheme::FasterPayments)
                | Self::bit(PaymentScheme::Chaps),
        )
    }

    pub fn contains(&self, scheme: PaymentScheme) -> bool {
        self.0 & Self::bit(scheme) != 0
    }

    pub fn insert(&mut self, scheme: PaymentScheme) {
        self.0 |= Self::bit(scheme);
    }

    pub fn remove(&mut self, scheme: PaymentScheme) {
        self.0 &= !Self::bit(scheme);
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = PaymentScheme> + '_ {
        PaymentScheme::ALL
            .into_iter()
            .filter(|scheme| self.contains(*scheme))
    }
}

impl From<PaymentScheme> for AllowedPaymentSchemes {
    fn from(scheme: PaymentScheme) -> Self {
        Self(Self::bit(scheme))
    }
}

impl BitOr for AllowedPaymentSchemes {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<PaymentScheme> for AllowedPaymentSchemes {
    type Output = Self;
    fn bitor(self, rhs: PaymentScheme) -> Self::Output {
        self | Self::from(rhs)
    }
}

impl FromIterator<PaymentScheme> for AllowedPaymentSchemes {
    fn from_iter<I: IntoIterator<Item = PaymentScheme>>(iter: I) -> Self {
        let mut schemes = Self::empty();
        for scheme in iter {
            schemes.insert(scheme);
        }
        schemes
    }
}

impl fmt::Display for AllowedPaymentSchemes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|scheme| scheme.as_str()).collect();
        f.write_str(&names.join("|"))
    }
}

impl FromStr for AllowedPaymentSchemes {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('|')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(PaymentScheme::from_str)
            .collect()
    }
}

impl Serialize for AllowedPaymentSchemes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AllowedPaymentSchemes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Live,
    Disabled,
    InboundPaymentsOnly,
}

/// A debtor account as held by a backing store.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    /// The account identifier, unique within a store.
    pub number: String,
    /// Current balance. May be negative.
    pub balance: Balance,
    /// Schemes this account may be debited through.
    pub allowed_schemes: AllowedPaymentSchemes,
    pub status: AccountStatus,
}

impl Account {
    pub fn new(
        number: impl Into<String>,
        balance: Decimal,
        allowed_schemes: AllowedPaymentSchemes,
    ) -> Self {
        Self {
            number: number.into(),
            balance: Balance::new(balance),
            allowed_schemes,
            status: AccountStatus::Live,
        }
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_live(&self) -> bool {
        self.status == AccountStatus::Live
    }
}

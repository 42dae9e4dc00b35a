//! Address display sizes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressSize {
    Xs,
    Sm,
    #[default]
    Base,
    Lg,
    Xl,
    Xl2,
    Xl3,
}

impl AddressSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressSize::Xs => "xs",
            AddressSize::Sm => "sm",
            AddressSize::Base => "base",
            AddressSize::Lg => "lg",
            AddressSize::Xl => "xl",
            AddressSize::Xl2 => "2xl",
            AddressSize::Xl3 => "3xl",
        }
    }

    pub fn text_class(&self) -> String {
        format!("text-{}", self.as_str())
    }
}

impl fmt::Display for AddressSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xs" => Ok(AddressSize::Xs),
            "sm" => Ok(AddressSize::Sm),
            "base" => Ok(AddressSize::Base),
            "lg" => Ok(AddressSize::Lg),
            "xl" => Ok(AddressSize::Xl),
            "2xl" => Ok(AddressSize::Xl2),
            "3xl" => Ok(AddressSize::Xl3),
            other => Err(format!("unknown address size: {}", other)),
        }
    }
}

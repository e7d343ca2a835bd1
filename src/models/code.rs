//! Asset codes name the underlying asset a record represents. The set is
//! closed: supporting a new asset means adding a variant here.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The closed set of asset codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "lowercase"))]
pub enum AssetCode {
    /// No particular asset.
    None,
    /// Bitcoin.
    Btc,
}

impl AssetCode {
    /// The canonical text label for this code.
    pub fn label(&self) -> &'static str {
        match self {
            AssetCode::None => "none",
            AssetCode::Btc => "btc",
        }
    }
}

impl Default for AssetCode {
    fn default() -> Self {
        AssetCode::None
    }
}

impl fmt::Display for AssetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetCode {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        Ok(match label {
            "none" => AssetCode::None,
            "btc" => AssetCode::Btc,
            _ => Err(Error::UnknownAssetCode(label.into()))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(AssetCode::None.label(), "none");
        assert_eq!(AssetCode::Btc.label(), "btc");
        assert_eq!(format!("{}", AssetCode::Btc), "btc");
        assert_eq!(AssetCode::default(), AssetCode::None);
    }

    #[test]
    fn parse() {
        assert_eq!("btc".parse::<AssetCode>(), Ok(AssetCode::Btc));
        assert_eq!("none".parse::<AssetCode>(), Ok(AssetCode::None));
        // labels are exact
        assert_eq!("BTC".parse::<AssetCode>(), Err(Error::UnknownAssetCode("BTC".into())));
        assert_eq!("eth".parse::<AssetCode>(), Err(Error::UnknownAssetCode("eth".into())));
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&AssetCode::Btc).unwrap(), r#""btc""#);
        let code: AssetCode = serde_json::from_str(r#""none""#).unwrap();
        assert_eq!(code, AssetCode::None);
    }
}

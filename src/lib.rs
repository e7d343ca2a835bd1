//! A small model of crypto assets: a name, a closed-set [asset code], an
//! optional share average, and a derived "strong" classification.
//!
//! ```
//! use asset_core::{AssetCode, CryptoAsset, Currency};
//!
//! let btc = CryptoAsset::new("BitCoin", AssetCode::Btc, 40);
//! assert!(btc.is_strong());
//! assert_eq!(btc.describe(), "name=BitCoin, code=btc, shareAverage=40, isStrong=true");
//! ```
//!
//! [asset code]: models/code/enum.AssetCode.html

pub mod error;
mod util;
pub mod models;

pub use models::{
    code::AssetCode,
    crypto::{CryptoAsset, CryptoAssetBuilder},
    currency::{Currency, STRONG_THRESHOLD},
};

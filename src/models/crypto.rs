//! The crypto module holds the `CryptoAsset` model, a named crypto currency
//! with an optional share-average signal.
//!
//! Assets are immutable once built. Use [CryptoAsset::new] when every field
//! is known, or [CryptoAsset::builder] to leave the code or the share average
//! at their defaults.
//!
//! [CryptoAsset::new]: struct.CryptoAsset.html#method.new
//! [CryptoAsset::builder]: struct.CryptoAsset.html#method.builder

use crate::{
    error::{Error, Result},
    models::{
        code::AssetCode,
        currency::Currency,
    },
};
use getset::{CopyGetters, Getters};
use std::fmt;
use tracing::trace;

/// A crypto currency tracked by name and asset code.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters, derive_builder::Builder)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[builder(pattern = "owned", setter(into), build_fn(name = "build_fields"))]
pub struct CryptoAsset {
    /// The asset's display name, ie "BitCoin".
    #[getset(get = "pub")]
    name: String,
    /// Which asset this is. Defaults to `AssetCode::None`.
    #[getset(get_copy = "pub")]
    #[builder(default)]
    code: AssetCode,
    /// The historical share average. `None` means we have no data, which is
    /// not the same as a known zero.
    #[getset(get_copy = "pub")]
    #[builder(setter(strip_option), default)]
    #[cfg_attr(feature = "with_serde", serde(default, skip_serializing_if = "Option::is_none"))]
    share_average: Option<i64>,
}

impl CryptoAsset {
    /// Create a new asset with a known share average. Any value is accepted,
    /// including negatives.
    pub fn new<T: Into<String>>(name: T, code: AssetCode, share_average: i64) -> Self {
        let asset = Self {
            name: name.into(),
            code,
            share_average: Some(share_average),
        };
        trace!(asset = %asset.name, code = %asset.code, share_average, "created crypto asset");
        asset
    }

    pub fn builder() -> CryptoAssetBuilder {
        CryptoAssetBuilder::default()
    }
}

impl CryptoAssetBuilder {
    /// Build the asset, failing if the name was never set.
    pub fn build(self) -> Result<CryptoAsset> {
        let asset = self.build_fields()
            .map_err(|e| Error::BuilderFailed(e))?;
        trace!(asset = %asset.name, code = %asset.code, share_average = ?asset.share_average, "built crypto asset");
        Ok(asset)
    }
}

impl Currency for CryptoAsset {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn code(&self) -> AssetCode {
        self.code
    }

    fn share_average(&self) -> Option<i64> {
        self.share_average
    }
}

impl fmt::Display for CryptoAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

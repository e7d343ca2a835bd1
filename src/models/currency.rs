//! The currency module holds the `Currency` trait, the read-only shape shared
//! by every tradeable asset, along with the "strong" classification and the
//! one-line summary built on top of it.

use crate::models::code::AssetCode;

/// A share average strictly above this value makes an asset strong.
pub const STRONG_THRESHOLD: i64 = 30;

/// Describes a tradeable asset.
///
/// Implementors only supply the raw fields. The classification and the text
/// rendering are derived from them on every call and never stored.
pub trait Currency {
    /// The asset's display name.
    fn name(&self) -> &str;

    /// Which underlying asset this is.
    fn code(&self) -> AssetCode;

    /// The historical share average, if we have data for it.
    fn share_average(&self) -> Option<i64>;

    /// The share average with missing data read as zero.
    fn share_average_or_zero(&self) -> i64 {
        self.share_average().unwrap_or(0)
    }

    /// Whether this asset is strong, ie its share average is above
    /// [STRONG_THRESHOLD](constant.STRONG_THRESHOLD.html).
    fn is_strong(&self) -> bool {
        self.share_average_or_zero() > STRONG_THRESHOLD
    }

    /// Render a one-line `key=value` summary of this asset.
    fn describe(&self) -> String {
        format!(
            "name={}, code={}, shareAverage={}, isStrong={}",
            self.name(),
            self.code(),
            self.share_average_or_zero(),
            self.is_strong(),
        )
    }
}

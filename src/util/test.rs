use crate::models::{
    code::AssetCode,
    crypto::CryptoAsset,
};

pub(crate) fn make_asset<T: Into<String>>(name: T, code: AssetCode, share_average: Option<i64>) -> CryptoAsset {
    let builder = CryptoAsset::builder()
        .name(name)
        .code(code);
    match share_average {
        Some(avg) => builder.share_average(avg).build().unwrap(),
        None => builder.build().unwrap(),
    }
}

/// The asset the binary prints.
pub(crate) fn make_bitcoin() -> CryptoAsset {
    CryptoAsset::new("BitCoin", AssetCode::Btc, 40)
}

use asset_core::{
    error::Result,
    AssetCode,
    CryptoAsset,
    Currency,
};
use tracing::Level;

fn main() -> Result<()> {
    // stdout is reserved for the summary line
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let asset = CryptoAsset::builder()
        .name("BitCoin")
        .code(AssetCode::Btc)
        .share_average(40)
        .build()?;
    println!("{}", asset.describe());
    Ok(())
}

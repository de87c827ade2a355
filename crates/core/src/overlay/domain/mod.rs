pub mod asset_loader;
pub mod overlay_asset;

pub mod load;
pub mod types;

pub use load::{apply_env_overrides, clamp_thumbnail_count};
pub use types::{
    Config, DEFAULT_THUMBNAIL_COUNT, FrontEndKind, Language, MAX_THUMBNAIL_COUNT, ManifestResolution,
    UserSettings,
};

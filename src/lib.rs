//! Blocking client for the World of Warcraft community api.
//!
//! The [`Explorer`] holds the region, locale and api key and exposes one method per endpoint.
//! Every endpoint lives in its own module under [`end_point`] together with the types it returns.
//!
//! ```no_run
//! use wowapi::{CharacterOption, Explorer, Locale, Region};
//!
//! let explorer = Explorer::new(Region::EU, Locale::en_GB, "my-key");
//! let character = explorer.character(
//!     "Argent Dawn",
//!     "Someone",
//!     CharacterOption::Guild | CharacterOption::Items,
//! )?;
//! println!("{} is level {}", character.name, character.level);
//! # Ok::<(), wowapi::ApiError>(())
//! ```
//!
//! resources:
//! 1. https://dev.battle.net/io-docs (community api, wow section)
pub mod end_point;
pub mod error;
pub mod explorer;
pub mod options;
pub mod region;
pub mod transport;

pub use enumflags2::BitFlags;
pub use error::ApiError;
pub use explorer::{Explorer, ExplorerConfig};
pub use options::{CharacterOption, FieldFlag, GuildOption};
pub use region::{Locale, Region};
pub use transport::Transport;

pub(crate) mod prelude {
    pub use crate::end_point::EndPoint;
    pub use crate::error::ApiError;
    pub use serde::{de::DeserializeOwned, Deserialize, Serialize};
    pub use std::borrow::Cow;
    pub type Result<T, E = ApiError> = std::result::Result<T, E>;
    /// every community api path is rooted here
    pub const API_ROOT: &str = "wow";
}

//! Auction house snapshots.
//!
//! `auction/data/{realm}` only returns a manifest of dump files. The auctions themselves are
//! downloaded from the url of a listed file, see [`Explorer::auctions`](crate::Explorer::auctions).
use crate::{end_point::items::ItemId, prelude::*};

/// Manifest of auction dumps for one realm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuctionFiles {
    pub files: Vec<AuctionFile>,
}

impl AuctionFiles {
    /// the dump that gets downloaded. the api lists the newest file last
    pub fn latest(&self) -> Option<&AuctionFile> {
        self.files.last()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuctionFile {
    /// absolute url of the json dump
    pub url: String,
    /// unix millis
    pub last_modified: u64,
}

/// Contents of an auction dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Auctions {
    /// connected realms sharing this auction house
    pub realms: Vec<AuctionRealm>,
    pub auctions: Vec<Auction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuctionRealm {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Auction {
    #[serde(rename = "auc")]
    pub id: u64,
    #[serde(rename = "item")]
    pub item_id: ItemId,
    pub owner: String,
    pub owner_realm: String,
    /// copper
    pub bid: u64,
    /// copper, 0 when there is no buyout
    pub buyout: u64,
    pub quantity: u32,
    pub time_left: TimeLeft,
    pub rand: i64,
    pub seed: i64,
    pub context: u32,
    pub bonus_lists: Vec<AuctionBonus>,
    /// only set for caged battle pets
    pub pet_species_id: Option<u32>,
    pub pet_breed_id: Option<u32>,
    pub pet_level: Option<u32>,
    pub pet_quality_id: Option<u32>,
}

impl Auction {
    pub fn is_pet(&self) -> bool {
        self.pet_species_id.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuctionBonus {
    pub bonus_list_id: u32,
}

/// Remaining duration bucket of an auction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeLeft {
    /// less than 30 minutes
    Short,
    /// 30 minutes to 2 hours
    Medium,
    /// 2 to 12 hours
    Long,
    /// 12 to 48 hours
    VeryLong,
    #[default]
    #[serde(other)]
    Unknown,
}

/// realm names are lower cased and spaces become dashes: `Argent Dawn` -> `argent-dawn`
pub fn realm_slug(realm: &str) -> String {
    realm.to_lowercase().replace(' ', "-")
}

pub struct AuctionData<'a> {
    pub realm: &'a str,
}

impl EndPoint for AuctionData<'_> {
    type RType = AuctionFiles;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["auction".into(), "data".into(), realm_slug(self.realm).into()]
    }
}

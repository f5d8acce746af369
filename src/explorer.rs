use enumflags2::BitFlags;
use tracing::debug;
use url::Url;

use crate::{
    end_point::{
        achievements::{
            AchievementById, AchievementInfo, AchievementList, CharacterAchievements,
            GuildAchievements,
        },
        auctions::{realm_slug, AuctionData, Auctions},
        battlegroups::{BattlegroupInfo, Battlegroups},
        challenges::{Challenges, RealmChallenges},
        characters::{Character, CharacterProfile},
        classes::{CharacterClassInfo, CharacterClasses},
        fetch,
        guild_perks::{GuildPerkInfo, GuildPerks},
        guild_rewards::{GuildRewardInfo, GuildRewards},
        guilds::{Guild, GuildProfile},
        items::{Item, ItemById, ItemClassInfo, ItemClasses, ItemId},
        races::{CharacterRaceInfo, CharacterRaces},
        realms::{Realm, RealmStatus},
        RequestUrl,
    },
    options::{CharacterOption, GuildOption},
    prelude::*,
    region::{Locale, Region},
    transport::{default_client, HttpClient, Transport},
};

/// Connection parameters of an [`Explorer`], meant to be embedded in an application's own config.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub region: Region,
    pub locale: Locale,
    pub api_key: String,
}

impl std::fmt::Debug for ExplorerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplorerConfig")
            .field("region", &self.region)
            .field("locale", &self.locale)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// The api client. One method per endpoint.
///
/// Every method talks to the configured region. The `_in` variants take a region for just
/// that call, the locale and api key stay the same.
/// Calls block until the response is deserialized. Failures are returned, never retried.
pub struct Explorer<C = HttpClient> {
    region: Region,
    locale: Locale,
    api_key: String,
    host: &'static str,
    client: C,
}

impl Explorer<HttpClient> {
    pub fn new(region: Region, locale: Locale, api_key: impl Into<String>) -> Self {
        Self::with_transport(region, locale, api_key, default_client())
    }

    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.region, config.locale, config.api_key.clone())
    }
}

impl<C: Transport> Explorer<C> {
    pub fn with_transport(
        region: Region,
        locale: Locale,
        api_key: impl Into<String>,
        client: C,
    ) -> Self {
        Self {
            region,
            locale,
            api_key: api_key.into(),
            host: region.host(),
            client,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// host of the configured region
    pub fn host(&self) -> &'static str {
        self.host
    }

    pub fn transport(&self) -> &C {
        &self.client
    }

    fn request_url(&self, region: Region) -> RequestUrl<'_> {
        RequestUrl {
            host: region.host(),
            locale: self.locale,
            api_key: &self.api_key,
        }
    }

    /// full request url of `end_point` in `region`
    pub fn url_for<E: EndPoint + ?Sized>(&self, region: Region, end_point: &E) -> Result<Url> {
        self.request_url(region).build(end_point)
    }

    /// Fetches any [`EndPoint`] and returns the raw json envelope.
    pub fn get<E: EndPoint + ?Sized>(&self, region: Region, end_point: &E) -> Result<E::RType> {
        let url = self.url_for(region, end_point)?;
        fetch(&self.client, &url)
    }

    pub fn character(
        &self,
        realm: &str,
        name: &str,
        options: impl Into<BitFlags<CharacterOption>>,
    ) -> Result<Character> {
        self.character_in(self.region, realm, name, options)
    }

    pub fn character_in(
        &self,
        region: Region,
        realm: &str,
        name: &str,
        options: impl Into<BitFlags<CharacterOption>>,
    ) -> Result<Character> {
        self.get(
            region,
            &CharacterProfile {
                realm,
                name,
                options: options.into(),
            },
        )
    }

    pub fn guild(
        &self,
        realm: &str,
        name: &str,
        options: impl Into<BitFlags<GuildOption>>,
    ) -> Result<Guild> {
        self.guild_in(self.region, realm, name, options)
    }

    pub fn guild_in(
        &self,
        region: Region,
        realm: &str,
        name: &str,
        options: impl Into<BitFlags<GuildOption>>,
    ) -> Result<Guild> {
        self.get(
            region,
            &GuildProfile {
                realm,
                name,
                options: options.into(),
            },
        )
    }

    /// status of every realm in the region. an empty list is not an error
    pub fn realms(&self) -> Result<Vec<Realm>> {
        self.realms_in(self.region)
    }

    pub fn realms_in(&self, region: Region) -> Result<Vec<Realm>> {
        Ok(self.get(region, &RealmStatus)?.realms)
    }

    /// Latest auction house snapshot of `realm`.
    ///
    /// First fetches the manifest of dump files, then downloads the last listed file.
    /// `Ok(None)` when the manifest lists no files, in which case nothing else is requested.
    pub fn auctions(&self, realm: &str) -> Result<Option<Auctions>> {
        self.auctions_in(self.region, realm)
    }

    pub fn auctions_in(&self, region: Region, realm: &str) -> Result<Option<Auctions>> {
        let files = self.get(region, &AuctionData { realm })?;
        let Some(file) = files.latest() else {
            debug!(realm, slug = %realm_slug(realm), "auction manifest lists no files");
            return Ok(None);
        };
        debug!(
            realm,
            files = files.files.len(),
            last_modified = file.last_modified,
            "downloading auction dump"
        );
        let url = Url::parse(&file.url)?;
        fetch(&self.client, &url).map(Some)
    }

    pub fn item(&self, id: ItemId) -> Result<Item> {
        self.item_in(self.region, id)
    }

    pub fn item_in(&self, region: Region, id: ItemId) -> Result<Item> {
        self.get(region, &ItemById(id))
    }

    /// Item lookup through the old `{region}.battle.net/api` host, which needs no api key.
    pub fn item_without_key(&self, id: ItemId) -> Result<Item> {
        self.item_without_key_in(self.region, id)
    }

    pub fn item_without_key_in(&self, region: Region, id: ItemId) -> Result<Item> {
        let url = Url::parse(&format!(
            "{}/api/wow/item/{id}?locale={}",
            region.legacy_host(),
            self.locale
        ))?;
        fetch(&self.client, &url)
    }

    pub fn item_classes(&self) -> Result<Vec<ItemClassInfo>> {
        self.item_classes_in(self.region)
    }

    pub fn item_classes_in(&self, region: Region) -> Result<Vec<ItemClassInfo>> {
        Ok(self.get(region, &ItemClasses)?.classes)
    }

    pub fn character_races(&self) -> Result<Vec<CharacterRaceInfo>> {
        self.character_races_in(self.region)
    }

    pub fn character_races_in(&self, region: Region) -> Result<Vec<CharacterRaceInfo>> {
        Ok(self.get(region, &CharacterRaces)?.races)
    }

    pub fn character_classes(&self) -> Result<Vec<CharacterClassInfo>> {
        self.character_classes_in(self.region)
    }

    pub fn character_classes_in(&self, region: Region) -> Result<Vec<CharacterClassInfo>> {
        Ok(self.get(region, &CharacterClasses)?.classes)
    }

    pub fn guild_rewards(&self) -> Result<Vec<GuildRewardInfo>> {
        self.guild_rewards_in(self.region)
    }

    pub fn guild_rewards_in(&self, region: Region) -> Result<Vec<GuildRewardInfo>> {
        Ok(self.get(region, &GuildRewards)?.rewards)
    }

    pub fn guild_perks(&self) -> Result<Vec<GuildPerkInfo>> {
        self.guild_perks_in(self.region)
    }

    pub fn guild_perks_in(&self, region: Region) -> Result<Vec<GuildPerkInfo>> {
        Ok(self.get(region, &GuildPerks)?.perks)
    }

    pub fn achievement(&self, id: u32) -> Result<AchievementInfo> {
        self.achievement_in(self.region, id)
    }

    pub fn achievement_in(&self, region: Region, id: u32) -> Result<AchievementInfo> {
        self.get(region, &AchievementById(id))
    }

    /// every character achievement, grouped by category
    pub fn achievements(&self) -> Result<Vec<AchievementList>> {
        self.achievements_in(self.region)
    }

    pub fn achievements_in(&self, region: Region) -> Result<Vec<AchievementList>> {
        Ok(self.get(region, &CharacterAchievements)?.achievements)
    }

    pub fn guild_achievements(&self) -> Result<Vec<AchievementList>> {
        self.guild_achievements_in(self.region)
    }

    pub fn guild_achievements_in(&self, region: Region) -> Result<Vec<AchievementList>> {
        Ok(self.get(region, &GuildAchievements)?.achievements)
    }

    pub fn battlegroups(&self) -> Result<Vec<BattlegroupInfo>> {
        self.battlegroups_in(self.region)
    }

    pub fn battlegroups_in(&self, region: Region) -> Result<Vec<BattlegroupInfo>> {
        Ok(self.get(region, &Battlegroups)?.battlegroups)
    }

    pub fn challenges(&self, realm: &str) -> Result<Challenges> {
        self.challenges_in(self.region, realm)
    }

    pub fn challenges_in(&self, region: Region, realm: &str) -> Result<Challenges> {
        self.get(region, &RealmChallenges { realm })
    }
}

impl<C> std::fmt::Debug for Explorer<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Explorer")
            .field("region", &self.region)
            .field("locale", &self.locale)
            .field("host", &self.host)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

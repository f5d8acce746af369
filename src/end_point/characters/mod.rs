//! Character profiles.
//!
//! The plain profile is always present. Everything wrapped in an `Option` is only sent by the api
//! when the matching [`CharacterOption`] is part of the request.
use std::collections::BTreeMap;

use enumflags2::BitFlags;

use crate::{
    end_point::{
        achievements::{AchievementInfo, AchievementProgress, Criterion},
        classes::{ClassId, Spec},
        guild_perks::Spell,
        guilds::GuildEmblem,
        items::{ItemId, ItemSummary},
        races::RaceId,
    },
    options::{fields_query, CharacterOption},
    prelude::*,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    /// unix millis
    pub last_modified: u64,
    pub name: String,
    pub realm: String,
    pub battlegroup: String,
    #[serde(rename = "class")]
    pub class_id: ClassId,
    #[serde(rename = "race")]
    pub race_id: RaceId,
    /// 0 male, 1 female
    pub gender: u32,
    pub level: u32,
    pub achievement_points: u32,
    /// path of the avatar below `render.worldofwarcraft.com/character/`
    pub thumbnail: String,
    pub calc_class: String,
    /// 0 alliance, 1 horde
    pub faction: u32,
    pub total_honorable_kills: u32,

    pub guild: Option<CharacterGuild>,
    pub stats: Option<CharacterStats>,
    pub talents: Option<Vec<TalentSpec>>,
    pub items: Option<CharacterItems>,
    pub reputation: Option<Vec<Reputation>>,
    pub titles: Option<Vec<Title>>,
    pub professions: Option<Professions>,
    pub appearance: Option<Appearance>,
    pub pet_slots: Option<Vec<PetSlot>>,
    pub mounts: Option<Collection<Mount>>,
    pub pets: Option<Collection<Pet>>,
    pub achievements: Option<AchievementProgress>,
    pub progression: Option<Progression>,
    pub feed: Option<Vec<FeedEntry>>,
    pub pvp: Option<Pvp>,
    pub quests: Option<Vec<u32>>,
    pub hunter_pets: Option<Vec<HunterPet>>,
}

impl Character {
    /// the title currently displayed, if any
    pub fn selected_title(&self) -> Option<&Title> {
        self.titles.as_ref()?.iter().find(|title| title.selected)
    }

    /// the active talent specialization, if talents were requested
    pub fn active_spec(&self) -> Option<&TalentSpec> {
        self.talents.as_ref()?.iter().find(|spec| spec.selected)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterGuild {
    pub name: String,
    pub realm: String,
    pub battlegroup: String,
    pub level: u32,
    pub members: u32,
    pub achievement_points: u32,
    pub emblem: GuildEmblem,
}

/// Primary and secondary stats. Keys the api adds later end up in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterStats {
    pub health: u64,
    #[serde(rename = "powerType")]
    pub power_type: String,
    pub power: u64,
    #[serde(rename = "str")]
    pub strength: u32,
    #[serde(rename = "agi")]
    pub agility: u32,
    #[serde(rename = "int")]
    pub intellect: u32,
    #[serde(rename = "sta")]
    pub stamina: u32,
    pub crit: f64,
    pub haste: f64,
    pub mastery: f64,
    pub versatility: u32,
    pub armor: u32,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TalentSpec {
    pub selected: bool,
    pub talents: Vec<Talent>,
    pub spec: Option<Spec>,
    pub calc_talent: String,
    pub calc_spec: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Talent {
    pub tier: u32,
    pub column: u32,
    pub spell: Spell,
}

/// Equipped gear keyed by slot name (`head`, `mainHand`, `finger1` ..).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterItems {
    pub average_item_level: u32,
    pub average_item_level_equipped: u32,
    #[serde(flatten)]
    pub slots: BTreeMap<String, ItemSummary>,
}

impl CharacterItems {
    pub fn slot(&self, slot: &str) -> Option<&ItemSummary> {
        self.slots.get(slot)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reputation {
    pub id: u32,
    pub name: String,
    /// 0 hated .. 7 exalted
    pub standing: u32,
    pub value: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Title {
    pub id: u32,
    /// contains `%s` where the character name goes
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Professions {
    pub primary: Vec<Profession>,
    pub secondary: Vec<Profession>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profession {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub rank: u32,
    pub max: u32,
    pub recipes: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Appearance {
    pub face_variation: u32,
    pub skin_color: u32,
    pub hair_variation: u32,
    pub hair_color: u32,
    pub feature_variation: u32,
    pub show_helm: bool,
    pub show_cloak: bool,
    pub custom_display_options: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PetSlot {
    pub slot: u32,
    pub battle_pet_guid: String,
    pub is_empty: bool,
    pub is_locked: bool,
    pub abilities: Vec<u32>,
}

/// Collected mounts or pets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Collection<T> {
    pub num_collected: u32,
    pub num_not_collected: u32,
    pub collected: Vec<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mount {
    pub name: String,
    pub spell_id: u32,
    pub creature_id: u32,
    pub item_id: ItemId,
    pub quality_id: u32,
    pub icon: String,
    pub is_ground: bool,
    pub is_flying: bool,
    pub is_aquatic: bool,
    pub is_jumping: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pet {
    pub name: String,
    pub spell_id: u32,
    pub creature_id: u32,
    pub item_id: ItemId,
    pub quality_id: u32,
    pub icon: String,
    pub stats: PetStats,
    pub battle_pet_guid: String,
    pub is_favorite: bool,
    pub creature_name: String,
    pub can_battle: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PetStats {
    pub species_id: u32,
    pub breed_id: u32,
    pub pet_quality_id: u32,
    pub level: u32,
    pub health: u32,
    pub power: u32,
    pub speed: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progression {
    pub raids: Vec<Raid>,
}

/// Raid progress. The difficulty fields are 0 none, 1 in progress, 2 cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Raid {
    pub id: u32,
    pub name: String,
    pub lfr: u32,
    pub normal: u32,
    pub heroic: u32,
    pub mythic: u32,
    pub bosses: Vec<Boss>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Boss {
    pub id: u32,
    pub name: String,
    pub lfr_kills: u32,
    pub normal_kills: u32,
    pub heroic_kills: u32,
    pub mythic_kills: u32,
}

/// Activity feed entry, tagged by the `type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedEntry {
    #[serde(rename = "ACHIEVEMENT")]
    Achievement(AchievementFeed),
    #[serde(rename = "CRITERIA")]
    Criteria(CriteriaFeed),
    #[serde(rename = "LOOT")]
    Loot(LootFeed),
    #[serde(rename = "BOSSKILL")]
    BossKill(BossKillFeed),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AchievementFeed {
    pub timestamp: u64,
    pub achievement: AchievementInfo,
    pub feat_of_strength: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaFeed {
    pub timestamp: u64,
    pub achievement: AchievementInfo,
    pub criteria: Criterion,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LootFeed {
    pub timestamp: u64,
    pub item_id: ItemId,
    pub context: String,
    pub bonus_lists: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossKillFeed {
    pub timestamp: u64,
    pub quantity: u32,
    pub name: String,
    pub achievement: AchievementInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pvp {
    /// keyed by bracket name, `ARENA_BRACKET_2v2` ..
    pub brackets: BTreeMap<String, PvpBracket>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PvpBracket {
    pub slug: String,
    pub rating: u32,
    pub weekly_played: u32,
    pub weekly_won: u32,
    pub weekly_lost: u32,
    pub season_played: u32,
    pub season_won: u32,
    pub season_lost: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HunterPet {
    pub name: String,
    pub creature: u32,
    pub slot: u32,
    pub selected: bool,
    pub family_id: u32,
    pub family_name: String,
    pub spec: Option<Spec>,
    pub calc_spec: String,
}

pub struct CharacterProfile<'a> {
    pub realm: &'a str,
    pub name: &'a str,
    pub options: BitFlags<CharacterOption>,
}

impl EndPoint for CharacterProfile<'_> {
    type RType = Character;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["character".into(), self.realm.into(), self.name.into()]
    }
    fn fields(&self) -> String {
        fields_query(self.options)
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    const PLAIN: &str = r#"{
        "lastModified":1541538412000,
        "name":"Thrall",
        "realm":"Draenor",
        "battlegroup":"Misery",
        "class":7,
        "race":2,
        "gender":0,
        "level":120,
        "achievementPoints":14950,
        "thumbnail":"draenor/10/12345-avatar.jpg",
        "calcClass":"W",
        "faction":1,
        "totalHonorableKills":8765
    }"#;

    #[test]
    fn plain_profile_has_no_optional_parts() {
        let character: Character = serde_json::from_str(PLAIN).unwrap();
        assert_eq!(character.name, "Thrall");
        assert_eq!(character.class_id, 7);
        assert_eq!(character.race_id, 2);
        assert_eq!(character.level, 120);
        assert_eq!(character.total_honorable_kills, 8765);
        assert!(character.guild.is_none());
        assert!(character.items.is_none());
        assert!(character.feed.is_none());
        assert_eq!(character.selected_title(), None);
    }

    #[test]
    fn optional_parts() {
        let character: Character = serde_json::from_str(
            r#"{
                "name":"Thrall",
                "guild":{"name":"Horde Council","realm":"Draenor","battlegroup":"Misery","members":812,"achievementPoints":2345,
                    "emblem":{"icon":141,"iconColor":"ffdfa55a","iconColorId":15,"border":0,"borderColor":"ff0f1415","borderColorId":15,"backgroundColor":"ff232323","backgroundColorId":45}},
                "stats":{"health":250000,"powerType":"mana","power":50000,"str":1200,"agi":1100,"int":9000,"sta":12000,"crit":21.5,"haste":15.25,"mastery":40.0,"versatility":900,"armor":2200,"leech":1.5},
                "items":{"averageItemLevel":385,"averageItemLevelEquipped":383,
                    "head":{"id":159338,"name":"Stormlurker's Cowl","icon":"inv_helm","quality":4,"itemLevel":385,"tooltipParams":{"azeritePower0":1},"stats":[{"stat":7,"amount":1000}],"armor":300,"context":"raid-normal","bonusLists":[4799,1502]},
                    "mainHand":{"id":161088,"name":"Stormcaller's Staff","quality":4,"itemLevel":390}},
                "titles":[{"id":1,"name":"Private %s","selected":false},{"id":47,"name":"%s the Conqueror","selected":true}],
                "talents":[{"selected":true,"talents":[{"tier":0,"column":1,"spell":{"id":201909,"name":"Echo of the Elements"}}],"spec":{"name":"Restoration","role":"HEALING","order":2},"calcTalent":"1","calcSpec":"b"},{"talents":[],"calcTalent":"","calcSpec":""}],
                "pvp":{"brackets":{"ARENA_BRACKET_2v2":{"slug":"2v2","rating":1800,"weeklyPlayed":10,"weeklyWon":6,"weeklyLost":4}}},
                "quests":[10,11,12],
                "hunterPets":[]
            }"#,
        )
        .unwrap();

        let guild = character.guild.as_ref().unwrap();
        assert_eq!(guild.name, "Horde Council");
        assert_eq!(guild.emblem.icon_color, "ffdfa55a");

        let stats = character.stats.as_ref().unwrap();
        assert_eq!(stats.intellect, 9000);
        assert_eq!(stats.crit, 21.5);
        assert_eq!(stats.other.get("leech"), Some(&serde_json::json!(1.5)));

        let items = character.items.as_ref().unwrap();
        assert_eq!(items.average_item_level_equipped, 383);
        assert_eq!(items.slots.len(), 2);
        let head = items.slot("head").unwrap();
        assert_eq!(head.bonus_lists, vec![4799, 1502]);
        assert_eq!(items.slot("mainHand").map(|item| item.item_level), Some(390));

        assert_eq!(
            character.selected_title().map(|title| title.name.as_str()),
            Some("%s the Conqueror")
        );
        let spec = character.active_spec().unwrap();
        assert_eq!(spec.spec.as_ref().map(|s| s.role.as_str()), Some("HEALING"));
        assert_eq!(spec.talents[0].spell.id, 201909);

        let bracket = &character.pvp.as_ref().unwrap().brackets["ARENA_BRACKET_2v2"];
        assert_eq!(bracket.rating, 1800);
        assert_eq!(bracket.season_played, 0);

        assert_eq!(character.quests, Some(vec![10, 11, 12]));
        assert_eq!(character.hunter_pets, Some(vec![]));
        assert!(character.mounts.is_none());
    }

    #[test]
    fn feed_entries() {
        let feed: Vec<FeedEntry> = serde_json::from_str(
            r#"[
                {"type":"LOOT","timestamp":1541000000000,"itemId":159338,"context":"raid-normal","bonusLists":[4799]},
                {"type":"BOSSKILL","timestamp":1541000000001,"quantity":3,"name":"G'huun","achievement":{"id":12345,"title":"G'huun kills"}},
                {"type":"ACHIEVEMENT","timestamp":1541000000002,"achievement":{"id":6,"title":"Level 10","points":10},"featOfStrength":false},
                {"type":"CRITERIA","timestamp":1541000000003,"achievement":{"id":7},"criteria":{"id":99,"description":"step","orderIndex":1,"max":5}},
                {"type":"SOMETHING_ELSE","timestamp":1}
            ]"#,
        )
        .unwrap();
        assert_eq!(feed.len(), 5);
        assert!(matches!(&feed[0], FeedEntry::Loot(loot) if loot.item_id == 159338));
        assert!(matches!(&feed[1], FeedEntry::BossKill(kill) if kill.quantity == 3));
        assert!(matches!(&feed[2], FeedEntry::Achievement(a) if a.achievement.points == 10));
        assert!(matches!(&feed[3], FeedEntry::Criteria(c) if c.criteria.max == 5));
        assert_eq!(feed[4], FeedEntry::Unknown);
    }

    #[test]
    fn collections() {
        let mounts: Collection<Mount> = serde_json::from_str(
            r#"{"numCollected":1,"numNotCollected":900,"collected":[{"name":"Swift Razzashi Raptor","spellId":24242,"creatureId":15104,"itemId":19872,"qualityId":4,"icon":"ability_mount_raptor","isGround":true,"isFlying":false,"isAquatic":false,"isJumping":true}]}"#,
        )
        .unwrap();
        assert_eq!(mounts.num_not_collected, 900);
        assert!(mounts.collected[0].is_jumping);

        let pets: Collection<Pet> = serde_json::from_str(
            r#"{"numCollected":1,"collected":[{"name":"Mechanical Squirrel","stats":{"speciesId":39,"breedId":5,"petQualityId":3,"level":25,"health":1546,"power":276,"speed":276},"canBattle":true}]}"#,
        )
        .unwrap();
        assert_eq!(pets.collected[0].stats.species_id, 39);
        assert!(pets.collected[0].can_battle);
    }

    #[test]
    fn profile_path_and_fields() {
        let profile = CharacterProfile {
            realm: "Draenor",
            name: "Thrall",
            options: CharacterOption::Guild | CharacterOption::Stats,
        };
        assert_eq!(profile.path(), vec!["character", "Draenor", "Thrall"]);
        assert_eq!(profile.fields(), "&fields=guild,stats");
    }
}

//! Optional sub-resources of the character and guild endpoints.
//!
//! The api only includes these payloads when they are listed in the `fields` query parameter.
//! A request takes a [`BitFlags`] set and [`fields_query`] turns it into `&fields=a,b,c`.
use enumflags2::{bitflags, BitFlag, BitFlags};

/// A flag that maps onto one entry of the `fields` query parameter.
pub trait FieldFlag: BitFlag {
    /// the name the api uses for this sub-resource
    fn field_name(self) -> &'static str;

    /// the union of every flag of this group
    fn everything() -> BitFlags<Self> {
        BitFlags::all()
    }
}

/// Builds the `&fields=..` fragment for a set of flags.
///
/// Names are emitted in flag definition order. An empty set gives an empty fragment.
pub fn fields_query<T: FieldFlag>(flags: BitFlags<T>) -> String {
    if flags.is_empty() {
        return String::new();
    }
    let names: Vec<&'static str> = flags.iter().map(FieldFlag::field_name).collect();
    format!("&fields={}", names.join(","))
}

#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterOption {
    Guild = 1 << 0,
    Stats = 1 << 1,
    Talents = 1 << 2,
    Items = 1 << 3,
    Reputation = 1 << 4,
    Titles = 1 << 5,
    Professions = 1 << 6,
    Appearance = 1 << 7,
    PetSlots = 1 << 8,
    Mounts = 1 << 9,
    Pets = 1 << 10,
    Achievements = 1 << 11,
    Progression = 1 << 12,
    Feed = 1 << 13,
    PvP = 1 << 14,
    Quests = 1 << 15,
    HunterPets = 1 << 16,
}

impl FieldFlag for CharacterOption {
    fn field_name(self) -> &'static str {
        match self {
            CharacterOption::Guild => "guild",
            CharacterOption::Stats => "stats",
            CharacterOption::Talents => "talents",
            CharacterOption::Items => "items",
            CharacterOption::Reputation => "reputation",
            CharacterOption::Titles => "titles",
            CharacterOption::Professions => "professions",
            CharacterOption::Appearance => "appearance",
            CharacterOption::PetSlots => "petSlots",
            CharacterOption::Mounts => "mounts",
            CharacterOption::Pets => "pets",
            CharacterOption::Achievements => "achievements",
            CharacterOption::Progression => "progression",
            CharacterOption::Feed => "feed",
            CharacterOption::PvP => "pvp",
            CharacterOption::Quests => "quests",
            CharacterOption::HunterPets => "hunterPets",
        }
    }
}

#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuildOption {
    Members = 1 << 0,
    Achievements = 1 << 1,
    News = 1 << 2,
}

impl FieldFlag for GuildOption {
    fn field_name(self) -> &'static str {
        match self {
            GuildOption::Members => "members",
            GuildOption::Achievements => "achievements",
            GuildOption::News => "news",
        }
    }
}

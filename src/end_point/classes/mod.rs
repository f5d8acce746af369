use crate::prelude::*;

pub type ClassId = u32;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterClassInfo {
    pub id: ClassId,
    pub mask: u32,
    /// `mana`, `rage`, `focus`, `energy`, `runic-power` ..
    pub power_type: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterClassesData {
    pub classes: Vec<CharacterClassInfo>,
}

/// A class specialization as embedded in talents, guild members and challenge groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spec {
    pub name: String,
    /// `TANK`, `HEALING` or `DPS`
    pub role: String,
    pub background_image: String,
    pub icon: String,
    pub description: String,
    pub order: u32,
}

pub struct CharacterClasses;

impl EndPoint for CharacterClasses {
    type RType = CharacterClassesData;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["data".into(), "character".into(), "classes".into()]
    }
}

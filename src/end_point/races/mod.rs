use crate::prelude::*;

pub type RaceId = u32;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterRaceInfo {
    pub id: RaceId,
    pub mask: u32,
    /// `alliance`, `horde` or `neutral`
    pub side: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterRacesData {
    pub races: Vec<CharacterRaceInfo>,
}

pub struct CharacterRaces;

impl EndPoint for CharacterRaces {
    type RType = CharacterRacesData;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["data".into(), "character".into(), "races".into()]
    }
}

use std::time::Duration;

use crate::{
    end_point::{classes::Spec, guilds::MemberCharacter, realms::Realm},
    prelude::*,
};

/// Best challenge mode runs of a realm, one entry per dungeon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Challenges {
    pub challenge: Vec<Challenge>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Challenge {
    pub realm: Realm,
    pub map: ChallengeMap,
    /// ordered by ranking
    pub groups: Vec<ChallengeGroup>,
}

impl Challenge {
    pub fn best(&self) -> Option<&ChallengeGroup> {
        self.groups.iter().min_by_key(|group| group.ranking)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChallengeMap {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub has_challenge_mode: bool,
    pub bronze_criteria: ChallengeTime,
    pub silver_criteria: ChallengeTime,
    pub gold_criteria: ChallengeTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChallengeGroup {
    pub ranking: u32,
    pub time: ChallengeTime,
    /// `2013-09-30T21:18:13.000Z` style timestamp
    pub date: String,
    /// `GOLD`, `SILVER`, `BRONZE` or `NONE`
    pub medal: String,
    /// `alliance` or `horde`
    pub faction: String,
    pub is_recurring: bool,
    pub members: Vec<ChallengeMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeMember {
    /// missing when the character was deleted or transferred
    pub character: Option<MemberCharacter>,
    pub spec: Option<Spec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChallengeTime {
    /// total milliseconds
    pub time: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
    pub is_positive: bool,
}

impl ChallengeTime {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.time)
    }
}

pub struct RealmChallenges<'a> {
    pub realm: &'a str,
}

impl EndPoint for RealmChallenges<'_> {
    type RType = Challenges;
    fn path(&self) -> Vec<Cow<'_, str>> {
        vec!["challenge".into(), self.realm.into()]
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn deserialize_challenges() {
        let challenges: Challenges = serde_json::from_str(
            r#"{"challenge":[{
                "realm":{"name":"Medivh","slug":"medivh","battlegroup":"Ruin","locale":"en_US","timezone":"America/New_York","connected_realms":["medivh","exodar"]},
                "map":{"id":962,"name":"Gate of the Setting Sun","slug":"gate-of-the-setting-sun","hasChallengeMode":true,
                    "bronzeCriteria":{"time":2700000,"minutes":45,"isPositive":true},
                    "silverCriteria":{"time":1320000,"minutes":22,"isPositive":true},
                    "goldCriteria":{"time":780000,"minutes":13,"isPositive":true}},
                "groups":[
                    {"ranking":2,"time":{"time":700000,"minutes":11,"seconds":40,"isPositive":true},"date":"2013-09-30T21:18:13.000Z","medal":"GOLD","faction":"alliance","isRecurring":false,"members":[]},
                    {"ranking":1,"time":{"time":650123,"minutes":10,"seconds":50,"milliseconds":123,"isPositive":true},"date":"2013-09-29T21:18:13.000Z","medal":"GOLD","faction":"horde","isRecurring":false,
                     "members":[{"character":{"name":"Fast","realm":"Medivh","class":4},"spec":{"name":"Combat","role":"DPS"}},{"spec":{"name":"Protection","role":"TANK"}}]}
                ]}]}"#,
        )
        .unwrap();
        let challenge = &challenges.challenge[0];
        assert_eq!(challenge.realm.connected_realms, vec!["medivh", "exodar"]);
        assert_eq!(challenge.map.gold_criteria.duration(), Duration::from_secs(780));
        let best = challenge.best().unwrap();
        assert_eq!(best.ranking, 1);
        assert_eq!(best.time.milliseconds, 123);
        assert_eq!(best.members.len(), 2);
        assert!(best.members[1].character.is_none());
        assert_eq!(
            best.members[0].character.as_ref().map(|c| c.class_id),
            Some(4)
        );
    }
}

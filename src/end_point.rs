use std::any::type_name;

use tracing::{debug, debug_span};
use url::Url;

use crate::{prelude::*, region::Locale, transport::Transport};

pub mod achievements;
pub mod auctions;
pub mod battlegroups;
pub mod challenges;
pub mod characters;
pub mod classes;
pub mod guild_perks;
pub mod guild_rewards;
pub mod guilds;
pub mod items;
pub mod races;
pub mod realms;

/// A single community api resource.
///
/// Implementors describe where the resource lives below `/wow` and which json envelope comes back.
/// The host, locale and api key are filled in by [`RequestUrl`].
pub trait EndPoint {
    /// the json body returned by the api
    type RType: DeserializeOwned;
    /// path segments below `/wow`. an empty last segment produces a trailing slash
    fn path(&self) -> Vec<Cow<'_, str>>;
    /// the `&fields=..` fragment for endpoints with optional sub-resources
    fn fields(&self) -> String {
        String::new()
    }
}

/// Everything needed to turn an [`EndPoint`] into a full request url.
#[derive(Debug, Clone, Copy)]
pub struct RequestUrl<'a> {
    pub host: &'a str,
    pub locale: Locale,
    pub api_key: &'a str,
}

impl RequestUrl<'_> {
    /// `{host}/wow/{path}?locale={locale}{fields}&apikey={api_key}`
    pub fn build<E: EndPoint + ?Sized>(&self, end_point: &E) -> Result<Url> {
        let mut url = Url::parse(self.host)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(API_ROOT)
            .extend(end_point.path());
        url.set_query(Some(&format!(
            "locale={}{}&apikey={}",
            self.locale,
            end_point.fields(),
            self.api_key
        )));
        Ok(url)
    }
}

/// Issues a GET for `url` and deserializes the body into `T`.
///
/// Any transport failure or json mismatch is returned as is, there is no retry.
pub fn fetch<T: DeserializeOwned, C: Transport + ?Sized>(client: &C, url: &Url) -> Result<T> {
    let target = type_name::<T>();
    let _span = debug_span!("fetch", path = url.path(), rtype = target).entered();
    let body = client.get(url)?;
    debug!(bytes = body.len(), "received response");
    serde_json::from_str(&body).map_err(|source| ApiError::Decode {
        url: url.path().to_string(),
        target,
        source,
    })
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;
    use crate::transport::stub::{StubReply, StubTransport};

    struct Nested<'a> {
        realm: &'a str,
        name: &'a str,
    }

    impl EndPoint for Nested<'_> {
        type RType = serde_json::Value;
        fn path(&self) -> Vec<Cow<'_, str>> {
            vec!["character".into(), self.realm.into(), self.name.into()]
        }
        fn fields(&self) -> String {
            "&fields=guild,stats".to_string()
        }
    }

    struct TrailingSlash;

    impl EndPoint for TrailingSlash {
        type RType = serde_json::Value;
        fn path(&self) -> Vec<Cow<'_, str>> {
            vec!["data".into(), "battlegroups".into(), "".into()]
        }
    }

    const US: RequestUrl<'static> = RequestUrl {
        host: "https://us.api.battle.net",
        locale: Locale::en_US,
        api_key: "K",
    };

    #[test]
    fn builds_full_url() {
        let url = US
            .build(&Nested {
                realm: "Draenor",
                name: "Thrall",
            })
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://us.api.battle.net/wow/character/Draenor/Thrall?locale=en_US&fields=guild,stats&apikey=K"
        );
    }

    #[test]
    fn building_twice_gives_identical_urls() {
        let end_point = Nested {
            realm: "Argent Dawn",
            name: "Someone",
        };
        assert_eq!(
            US.build(&end_point).unwrap().as_str(),
            US.build(&end_point).unwrap().as_str()
        );
    }

    #[test]
    fn path_segments_are_escaped() {
        let url = US
            .build(&Nested {
                realm: "Argent Dawn",
                name: "a/b",
            })
            .unwrap();
        assert_eq!(url.path(), "/wow/character/Argent%20Dawn/a%2Fb");
    }

    #[test]
    fn empty_segment_keeps_trailing_slash() {
        let url = US.build(&TrailingSlash).unwrap();
        assert_eq!(
            url.as_str(),
            "https://us.api.battle.net/wow/data/battlegroups/?locale=en_US&apikey=K"
        );
    }

    #[test]
    fn no_locale_leaves_parameter_empty() {
        let url = RequestUrl {
            locale: Locale::None,
            ..US
        }
        .build(&TrailingSlash)
        .unwrap();
        assert_eq!(url.query(), Some("locale=&apikey=K"));
    }

    #[test]
    fn bad_host_is_an_error() {
        let err = RequestUrl {
            host: "not a url",
            ..US
        }
        .build(&TrailingSlash)
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        id: u32,
    }

    #[test]
    fn fetch_deserializes_body() {
        let client = StubTransport::new([StubReply::body(r#"{"id":7}"#)]);
        let url = Url::parse("https://us.api.battle.net/wow/x").unwrap();
        let payload: Payload = fetch(&client, &url).unwrap();
        assert_eq!(payload, Payload { id: 7 });
        assert_eq!(client.requests(), vec![url.to_string()]);
    }

    #[test]
    fn fetch_reports_malformed_json() {
        let client = StubTransport::new([StubReply::body("{\"id\":")]);
        let url = Url::parse("https://us.api.battle.net/wow/x?apikey=secret").unwrap();
        let err = fetch::<Payload, _>(&client, &url).unwrap_err();
        match err {
            ApiError::Decode { url, target, .. } => {
                assert_eq!(url, "/wow/x");
                assert!(target.ends_with("Payload"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn fetch_passes_transport_errors_through() {
        let client = StubTransport::new([StubReply::Status(503)]);
        let url = Url::parse("https://us.api.battle.net/wow/x").unwrap();
        let err = fetch::<Payload, _>(&client, &url).unwrap_err();
        assert_eq!(err.status(), Some(503));
    }
}

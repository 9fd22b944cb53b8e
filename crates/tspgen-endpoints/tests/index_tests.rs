use tspgen_core::config::EndpointsConfig;
use tspgen_core::{CodeGenerator, parse};
use tspgen_endpoints::{EndpointIndexGenerator, build_index, emit_index};

const RIOT_MINI: &str = include_str!("../../tspgen-core/tests/fixtures/riot-mini.json");

#[test]
fn index_riot_mini_groups() {
    let spec = parse::from_json(RIOT_MINI).unwrap();
    let index = build_index(&spec);

    let tags: Vec<&str> = index.groups.iter().map(|g| g.tag.as_str()).collect();
    assert_eq!(
        tags,
        [
            "Uncategorized",
            "account-v1",
            "champion-mastery-v4",
            "lol-status-v4",
            "match-v5",
            "tournament-stub-v5",
        ]
    );

    // `accounts/me` has no `tags` key, so its path is not consulted
    assert_eq!(index.group("account-v1").unwrap().rows.len(), 2);
    assert_eq!(index.group("Uncategorized").unwrap().rows.len(), 2);
}

#[test]
fn index_riot_mini_markdown() {
    let spec = parse::from_json(RIOT_MINI).unwrap();
    let content = emit_index(&build_index(&spec), &EndpointsConfig::default()).unwrap();

    insta::assert_snapshot!(content, @r#"
    # Riot API Endpoints

    > Generated from mingweisamuel/riotapi-schema (OpenAPI 3.0.0)

    ## Uncategorized

    | Method | Path | Summary |
    | --- | --- | --- |
    | GET | /lol/platform/v3/champion-rotations | Returns champion rotations, including free-to-play and low-level free-to-play rotations |
    | GET | /riot/account/v1/accounts/me | Get account by access token |

    ## account-v1

    | Method | Path | Summary |
    | --- | --- | --- |
    | GET | /riot/account/v1/accounts/by-puuid/{puuid} | Get account by puuid |
    | GET | /riot/account/v1/active-shards/by-game/{game}/by-puuid/{puuid} | Get active shard for a player |

    ## champion-mastery-v4

    | Method | Path | Summary |
    | --- | --- | --- |
    | GET | /lol/champion-mastery/v4/scores/by-puuid/{encryptedPUUID} | Get a player's total champion mastery score |

    ## lol-status-v4

    | Method | Path | Summary |
    | --- | --- | --- |
    | GET | /lol/status/v4/platform-data | Get League of Legends status for the given platform. |

    ## match-v5

    | Method | Path | Summary |
    | --- | --- | --- |
    | GET | /lol/match/v5/matches/by-puuid/{puuid}/ids | Get a list of match ids by puuid |

    ## tournament-stub-v5

    | Method | Path | Summary |
    | --- | --- | --- |
    | POST | /lol/tournament-stub/v5/codes | Create a tournament code for the given tournament. |
    "#);
}

#[test]
fn index_is_deterministic() {
    let spec = parse::from_json(RIOT_MINI).unwrap();
    let config = EndpointsConfig::default();
    let first = EndpointIndexGenerator.generate(&spec, &config).unwrap();
    let second = EndpointIndexGenerator.generate(&spec, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0].path, "endpoints.md");
    assert!(first[0].content.ends_with("|\n\n"));
}

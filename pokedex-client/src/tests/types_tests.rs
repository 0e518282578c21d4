use super::*;

#[test]
fn request_body_shape() {
    let body = GraphQlRequest {
        query: POKEMONS_QUERY,
        variables: PokemonsVariables { limit: 40 },
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["variables"]["limit"], 40);
    assert!(json["query"].as_str().unwrap().contains("pokemons(first: $limit)"));
}

#[test]
fn list_response_parses() {
    let text = r#"{"data":{"pokemons":[
        {"name":"Bulbasaur","image":"https://img/1.png","types":["Grass","Poison"],"number":"001"},
        {"name":"Ivysaur","image":"https://img/2.png","types":["Grass","Poison"],"number":"002"}
    ]}}"#;
    let resp: GraphQlResponse<PokemonsData> = serde_json::from_str(text).unwrap();
    let entries = resp.into_data().unwrap().pokemons.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].name, "Ivysaur");
}

#[test]
fn errors_array_wins_over_data() {
    let text = r#"{"data":{"pokemons":[]},"errors":[{"message":"first must be positive"}]}"#;
    let resp: GraphQlResponse<PokemonsData> = serde_json::from_str(text).unwrap();
    match resp.into_data() {
        Err(ClientError::GraphQl(msgs)) => assert_eq!(msgs, vec!["first must be positive"]),
        other => panic!("expected GraphQl error, got {other:?}"),
    }
}

#[test]
fn missing_data_is_malformed() {
    let resp: GraphQlResponse<PokemonsData> = serde_json::from_str("{}").unwrap();
    assert!(matches!(resp.into_data(), Err(ClientError::Malformed(_))));
}

#[test]
fn null_pokemon_parses_as_none() {
    let resp: GraphQlResponse<PokemonData> =
        serde_json::from_str(r#"{"data":{"pokemon":null}}"#).unwrap();
    assert!(resp.into_data().unwrap().pokemon.is_none());
}

#[test]
fn type_list_parses() {
    let text = r#"{"count":2,"next":null,"results":[
        {"name":"normal","url":"https://pokeapi.co/api/v2/type/1/"},
        {"name":"fighting","url":"https://pokeapi.co/api/v2/type/2/"}
    ]}"#;
    let resp: TypeListResponse = serde_json::from_str(text).unwrap();
    let names: Vec<_> = resp.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["normal", "fighting"]);
}

#[test]
fn graphql_error_display_joins_messages() {
    let err = ClientError::GraphQl(vec!["a".into(), "b".into()]);
    assert_eq!(err.to_string(), "GraphQL error: a; b");
}

fn parse_any<T: serde::de::DeserializeOwned>(text: &str) -> GraphQlResponse<T> {
    serde_json::from_str(text).unwrap()
}

#[test]
fn envelope_needs_no_default_payload() {
    let resp: GraphQlResponse<PokemonsData> = parse_any(r#"{"errors":[{"message":"boom"}]}"#);
    assert!(resp.data.is_none());
    assert_eq!(resp.errors.len(), 1);
}

//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: ApiClient → resource proxy → HTTP
//! request → typed entities, across pagination and user workflows.

use futures::StreamExt;
use pretty_assertions::assert_eq;
use rebrickable_api::{
    ApiClient, Configuration, Error, NewList, NewPartListPart, PageQuery, SetPartsQuery, UserToken,
};
use serde_json::{json, Value};
use wiremock::matchers::{
    body_string_contains, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Fixtures
// ============================================================================

fn client(server: &MockServer) -> ApiClient {
    let config = Configuration::builder("integration-key")
        .base_url(server.uri())
        .build()
        .unwrap();
    ApiClient::new(config).unwrap()
}

fn color(id: i64, name: &str, rgb: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "rgb": rgb,
        "is_trans": false,
        "external_ids": {
            "BrickLink": {"ext_ids": [86], "ext_descrs": [[name]]},
            "LEGO": {"ext_ids": [199], "ext_descrs": [[name]]}
        }
    })
}

fn part(part_num: &str, name: &str) -> Value {
    json!({
        "part_num": part_num,
        "name": name,
        "part_cat_id": 11,
        "part_url": format!("https://rebrickable.com/parts/{part_num}/"),
        "part_img_url": format!("https://cdn.rebrickable.com/media/parts/{part_num}.jpg"),
        "external_ids": {"BrickOwl": ["771344"], "LEGO": [part_num]},
        "print_of": null
    })
}

fn inventory_line(n: u32, set_num: &str) -> Value {
    json!({
        "id": 1000 + n,
        "inv_part_id": 5000 + n,
        "part": part(&format!("30{n:02}"), "Brick"),
        "color": color(0, "Black", "05131D"),
        "set_num": set_num,
        "quantity": 1,
        "is_spare": n % 10 == 9,
        "element_id": format!("62845{n:02}"),
        "num_sets": 100
    })
}

/// Mount a two-page inventory for `/lego/sets/60458-1/parts/`
async fn mount_inventory(server: &MockServer, flag: &str, lines: Vec<Value>) {
    let count = lines.len();
    let (first, second) = lines.split_at(25.min(count));
    let next = format!(
        "{}/lego/sets/60458-1/parts/?inc_minifig_parts={flag}&page=2",
        server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/lego/sets/60458-1/parts/"))
        .and(query_param("inc_minifig_parts", flag))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": count,
            "next": next,
            "previous": null,
            "results": first
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/lego/sets/60458-1/parts/"))
        .and(query_param("inc_minifig_parts", flag))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": count,
            "next": null,
            "previous": format!(
                "{}/lego/sets/60458-1/parts/?inc_minifig_parts={flag}",
                server.uri()
            ),
            "results": second
        })))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_get_color_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lego/colors/72/"))
        .and(header("Authorization", "key integration-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(color(72, "Dark Bluish Gray", "6C6E68")),
        )
        .expect(2)
        .mount(&server)
        .await;

    let lego = client(&server).lego();
    let first = lego.get_color(72).await.unwrap();
    let second = lego.get_color(72).await.unwrap();

    assert_eq!(first.name, "Dark Bluish Gray");
    assert_eq!(first, second);
    assert!(first.external_ids.unwrap().brick_link.unwrap().contains_id(86));
}

#[tokio::test]
async fn test_get_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lego/sets/31124-1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "set_num": "31124-1",
            "name": "Super Robot",
            "year": 2022,
            "theme_id": 672,
            "num_parts": 159,
            "set_img_url": "https://cdn.rebrickable.com/media/sets/31124-1/100863.jpg",
            "set_url": "https://rebrickable.com/sets/31124-1/super-robot/",
            "last_modified_dt": "2022-01-05T10:30:52.681290Z"
        })))
        .mount(&server)
        .await;

    let set = client(&server).lego().get_set("31124-1").await.unwrap();
    assert_eq!(set.name, "Super Robot");
    assert_eq!(set.year, 2022);
    assert_eq!(set.num_parts, 159);
    assert!(set.set_img_url.is_some());
}

#[tokio::test]
async fn test_set_parts_with_and_without_minifigs() {
    let server = MockServer::start().await;

    let plain: Vec<Value> = (0..38).map(|n| inventory_line(n, "60458-1")).collect();
    let mut with_figs = plain.clone();
    with_figs.extend((38..47).map(|n| inventory_line(n, "fig-015987")));

    mount_inventory(&server, "0", plain).await;
    mount_inventory(&server, "1", with_figs).await;

    let lego = client(&server).lego();

    let parts = lego
        .list_set_parts("60458-1", &SetPartsQuery::minifig_parts(false))
        .fetch_all()
        .await
        .unwrap();
    assert_eq!(parts.count, 38);
    assert_eq!(parts.len(), 38);
    assert!(parts.iter().all(|p| p.set_num == "60458-1"));
    assert!(parts.iter().any(|p| p.is_spare));

    let parts = lego
        .list_set_parts("60458-1", &SetPartsQuery::minifig_parts(true))
        .fetch_all()
        .await
        .unwrap();
    assert_eq!(parts.count, 47);
    assert!(parts.iter().any(|p| p.is_minifig_part()));
}

#[tokio::test]
async fn test_streamed_count_matches_reported_count() {
    let server = MockServer::start().await;
    let lines: Vec<Value> = (0..38).map(|n| inventory_line(n, "60458-1")).collect();
    mount_inventory(&server, "0", lines).await;

    let mut stream = client(&server)
        .lego()
        .list_set_parts("60458-1", &SetPartsQuery::minifig_parts(false))
        .into_stream();

    let mut seen = 0;
    while let Some(line) = stream.next().await {
        line.unwrap();
        seen += 1;
    }
    assert_eq!(seen, 38);
}

#[tokio::test]
async fn test_part_colors_agree_with_part_color_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lego/parts/3660/colors/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {
                    "color_id": 0, "color_name": "Black", "num_sets": 321, "num_set_parts": 812,
                    "part_img_url": null, "elements": ["366026", "4140576"]
                },
                {
                    "color_id": 4, "color_name": "Red", "num_sets": 140, "num_set_parts": 330,
                    "part_img_url": null, "elements": ["366021"]
                }
            ]
        })))
        .mount(&server)
        .await;

    for (color_id, num_sets, num_set_parts, elements) in [
        (0, 321, 812, json!(["366026", "4140576"])),
        (4, 140, 330, json!(["366021"])),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/lego/parts/3660/colors/{color_id}/")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "part_img_url": null,
                "year_from": 1976,
                "year_to": 2024,
                "num_sets": num_sets,
                "num_set_parts": num_set_parts,
                "elements": elements
            })))
            .mount(&server)
            .await;
    }

    let lego = client(&server).lego();
    let colors = lego
        .list_part_colors("3660", &PageQuery::default())
        .fetch_all()
        .await
        .unwrap();

    for entry in &colors {
        let detail = lego.get_part_color("3660", entry.color_id).await.unwrap();
        assert_eq!(detail.num_sets, entry.num_sets);
        assert_eq!(detail.num_set_parts, entry.num_set_parts);
        assert_eq!(detail.elements, entry.elements);
    }
}

#[tokio::test]
async fn test_unknown_part_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lego/parts/definitely-not-a-part/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&server)
        .await;

    let err = client(&server)
        .lego()
        .get_part("definitely-not-a-part")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(err.detail().as_deref(), Some("Not found."));
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_token_then_setlists() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/_token/"))
        .and(body_string_contains("username=brickfan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user_token": "u-7f3a"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/u-7f3a/setlists/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"id": 11, "is_buildable": true, "name": "Testing Set List", "num_sets": 1}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&server).users();
    let token = users.create_user_token("brickfan", "hunter2").await.unwrap();
    let lists = users
        .list_setlists(&token, &PageQuery::default())
        .send()
        .await
        .unwrap();

    assert_eq!(lists.count, 1);
    assert!(lists.results[0].name.starts_with("Testing Set List"));
}

#[tokio::test]
async fn test_partlist_round_trip() {
    let server = MockServer::start().await;
    let token_path = "/users/u-1/partlists";

    Mock::given(method("POST"))
        .and(path(format!("{token_path}/")))
        .and(body_string_contains("name=Testing+Part+List"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9, "is_buildable": true, "name": "Testing Part List", "num_parts": 0
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{token_path}/9/parts/")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "list_id": 9, "quantity": 1,
            "part": part("3020", "Plate 2 x 4"),
            "color": color(0, "Black", "05131D")
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{token_path}/9/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9, "is_buildable": true, "name": "Testing Part List", "num_parts": 1
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{token_path}/9/parts/3020/0/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list_id": 9, "quantity": 1,
            "part": part("3020", "Plate 2 x 4"),
            "color": color(0, "Black", "05131D")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&server).users();
    let token = UserToken::new("u-1");

    let list = users
        .create_partlist(&token, &NewList::new("Testing Part List"))
        .await
        .unwrap();
    assert_eq!(list.num_parts, 0);

    users
        .create_partlist_part(
            &token,
            list.id,
            &NewPartListPart {
                part_num: "3020".to_string(),
                color_id: 0,
                quantity: 1,
            },
        )
        .await
        .unwrap();

    let reread = users.get_partlist(&token, list.id).await.unwrap();
    assert_eq!(reread.num_parts, list.num_parts + 1);

    let line = users.get_partlist_part(&token, list.id, "3020", 0).await.unwrap();
    assert_eq!(line.list_id, list.id);
    assert_eq!(line.quantity, 1);
    assert!(line.part.external_ids.unwrap().brick_owl.is_some());
    assert!(line.color.external_ids.unwrap().lego.is_some());
}

#[tokio::test]
async fn test_bad_credentials_are_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/_token/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "non_field_errors": ["Unable to log in with provided credentials."]
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .users()
        .create_user_token("brickfan", "wrong")
        .await
        .unwrap_err();
    assert!(err.is_auth());
    assert!(!err.is_retryable());
}

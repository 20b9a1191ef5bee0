use actix_web::{App, http::header, test, web};
use serde_json::{Value, json};
use tutorank_core::{RankingPipeline, YouTubeClient};
use tutorank_server::{AppState, configure_routes, cors, static_files};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn state_for(mock_server: &MockServer) -> web::Data<AppState> {
    let client = YouTubeClient::new("test-key", mock_server.uri());
    web::Data::new(AppState::new(RankingPipeline::new(client)))
}

async fn mount_python_catalog(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "python tutorial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "id": { "videoId": "beg" },
                  "snippet": { "title": "Python for Beginners", "channelTitle": "One" } },
                { "id": { "videoId": "mid" },
                  "snippet": { "title": "Python list comprehensions", "channelTitle": "Two" } },
                { "id": { "videoId": "adv" },
                  "snippet": { "title": "Advanced Python", "channelTitle": "Three" } }
            ]
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "id": "beg", "statistics": { "viewCount": "1000" },
                  "contentDetails": { "duration": "PT6M40S" } },
                { "id": "mid", "statistics": { "viewCount": "2000" },
                  "contentDetails": { "duration": "PT8M20S" } },
                { "id": "adv", "statistics": { "viewCount": "3000" },
                  "contentDetails": { "duration": "PT10M" } }
            ]
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(3)
        .mount(mock_server)
        .await;
}

#[actix_web::test]
async fn test_search_returns_ranked_videos_and_curriculum() {
    let mock_server = MockServer::start().await;
    mount_python_catalog(&mock_server).await;

    let app = test::init_service(
        App::new()
            .app_data(state_for(&mock_server))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/search?q=python").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let videos = body["videos"].as_array().unwrap();
    let ids: Vec<&str> = videos.iter().map(|v| v["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["adv", "mid", "beg"]);

    let scores: Vec<f64> = videos.iter().map(|v| v["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));

    assert_eq!(videos[0]["durationSeconds"], 600);
    assert_eq!(videos[0]["views"], 3000);
    assert_eq!(videos[0]["commentScore"], 0);
    assert_eq!(videos[0]["level"], "advanced");
    assert_eq!(videos[0]["channel"], "Three");

    for (level, id) in [("beginner", "beg"), ("intermediate", "mid"), ("advanced", "adv")] {
        let entries = body["curriculum"][level].as_array().unwrap();
        assert_eq!(entries.len(), 1, "level {level}");
        assert_eq!(entries[0]["id"], id);
    }
}

#[actix_web::test]
async fn test_upstream_failure_returns_plain_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "quotaExceeded" }
        })))
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(state_for(&mock_server))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/search?q=rust").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = test::read_body(resp).await;
    assert_eq!(body, "Server error");
}

#[actix_web::test]
async fn test_missing_topic_is_rejected() {
    let mock_server = MockServer::start().await;

    let app = test::init_service(
        App::new()
            .app_data(state_for(&mock_server))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/search").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_cors_headers_are_added() {
    let mock_server = MockServer::start().await;

    let app = test::init_service(
        App::new()
            .app_data(state_for(&mock_server))
            .wrap(cors())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "http://example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[actix_web::test]
async fn test_static_index_is_served_next_to_api() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>tutorank</h1>").unwrap();
    let static_dir = dir.path().to_str().unwrap().to_string();

    let app = test::init_service(
        App::new()
            .app_data(state_for(&mock_server))
            .configure(configure_routes)
            .service(static_files(&static_dir)),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body = test::read_body(resp).await;
    assert_eq!(body, "<h1>tutorank</h1>");

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get().uri("/search").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

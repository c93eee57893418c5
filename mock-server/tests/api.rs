use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Fixtures, Org, OrgRecord, Repo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- org ---

#[tokio::test]
async fn get_org_returns_metadata() {
    let resp = app().oneshot(get_request("/orgs/google")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let org: Org = body_json(resp).await;
    assert_eq!(org.login, "google");
    assert_eq!(org.public_repos, 9);
    assert_eq!(org.url, "http://localhost/orgs/google");
    assert_eq!(org.repos_url, "http://localhost/orgs/google/repos");
}

#[tokio::test]
async fn get_org_repos_url_follows_host_header() {
    let req = Request::builder()
        .uri("/orgs/abc")
        .header(http::header::HOST, "127.0.0.1:4567")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let org: Org = body_json(resp).await;
    assert_eq!(org.repos_url, "http://127.0.0.1:4567/orgs/abc/repos");
}

#[tokio::test]
async fn get_org_unknown_returns_404() {
    let resp = app().oneshot(get_request("/orgs/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["message"], "Not Found");
}

// --- repos ---

#[tokio::test]
async fn list_repos_in_fixture_order() {
    let resp = app().oneshot(get_request("/orgs/google/repos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let repos: Vec<Repo> = body_json(resp).await;
    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "episodes.dart",
            "cpp-netlib",
            "dagger",
            "ios-webkit-debug-proxy",
            "google.github.io",
            "kratu",
            "build-debian-cloud",
            "traceur-compiler",
            "firmata.py",
        ]
    );
}

#[tokio::test]
async fn list_repos_serializes_missing_license_as_null() {
    let resp = app().oneshot(get_request("/orgs/abc/repos")).await.unwrap();

    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body[0]["license"]["key"], "mit");
    assert!(body[1]["license"].is_null());
}

#[tokio::test]
async fn list_repos_unknown_returns_404() {
    let resp = app().oneshot(get_request("/orgs/nope/repos")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn private_repos_are_hidden() {
    let mut hidden: Repo = serde_json::from_str(
        r#"{"id":2,"name":"secret","full_name":"acme/secret","license":null}"#,
    )
    .unwrap();
    hidden.private = true;
    let visible: Repo = serde_json::from_str(
        r#"{"id":1,"name":"open","full_name":"acme/open","license":null}"#,
    )
    .unwrap();
    let fixtures = Fixtures::new([OrgRecord {
        login: "acme".to_string(),
        id: 1,
        description: None,
        repos: vec![visible, hidden],
    }]);

    let app = app_with(fixtures);
    let org: Org = body_json(app.clone().oneshot(get_request("/orgs/acme")).await.unwrap()).await;
    assert_eq!(org.public_repos, 1);

    let repos: Vec<Repo> = body_json(app.oneshot(get_request("/orgs/acme/repos")).await.unwrap()).await;
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "open");
}

// --- routing ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get_request("/users/google")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn post_is_not_allowed() {
    let req = Request::builder()
        .method("POST")
        .uri("/orgs/google")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

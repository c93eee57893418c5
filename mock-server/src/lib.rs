use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
    pub spdx_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    pub license: Option<License>,
}

/// An organization as stored by the server. `url` and `repos_url` are not
/// stored; they are derived from the request's host when served.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrgRecord {
    pub login: String,
    pub id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub repos: Vec<Repo>,
}

/// The organization document returned by `GET /orgs/{org}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Org {
    pub login: String,
    pub id: u64,
    pub url: String,
    pub repos_url: String,
    pub description: Option<String>,
    pub public_repos: usize,
}

/// Canned organizations, keyed by login.
#[derive(Clone, Debug, Default)]
pub struct Fixtures {
    orgs: HashMap<String, OrgRecord>,
}

impl Fixtures {
    pub fn new(orgs: impl IntoIterator<Item = OrgRecord>) -> Self {
        Self {
            orgs: orgs.into_iter().map(|o| (o.login.clone(), o)).collect(),
        }
    }

    /// Parse a JSON array of `OrgRecord`s.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let orgs: Vec<OrgRecord> = serde_json::from_str(raw)?;
        Ok(Self::new(orgs))
    }

    pub fn get(&self, login: &str) -> Option<&OrgRecord> {
        self.orgs.get(login)
    }

    /// `google` with nine repositories across several licenses, and `abc`
    /// with two.
    pub fn sample() -> Self {
        let apache = ("apache-2.0", "Apache License 2.0", "Apache-2.0");
        let bsd3 = ("bsd-3-clause", "BSD 3-Clause \"New\" or \"Revised\" License", "BSD-3-Clause");
        let boost = ("bsl-1.0", "Boost Software License 1.0", "BSL-1.0");
        let other = ("other", "Other", "NOASSERTION");
        let mit = ("mit", "MIT License", "MIT");

        let google = OrgRecord {
            login: "google".to_string(),
            id: 1342004,
            description: Some("Google \u{2764}\u{fe0f} Open Source".to_string()),
            repos: vec![
                repo(7697149, "google", "episodes.dart", Some(bsd3)),
                repo(7776515, "google", "cpp-netlib", Some(boost)),
                repo(7968417, "google", "dagger", Some(apache)),
                repo(7988218, "google", "ios-webkit-debug-proxy", Some(other)),
                repo(8165161, "google", "google.github.io", None),
                repo(8459994, "google", "kratu", Some(apache)),
                repo(8566972, "google", "build-debian-cloud", Some(other)),
                repo(8858648, "google", "traceur-compiler", Some(apache)),
                repo(9060347, "google", "firmata.py", Some(apache)),
            ],
        };
        let abc = OrgRecord {
            login: "abc".to_string(),
            id: 4567,
            description: None,
            repos: vec![
                repo(100, "abc", "alphabet", Some(mit)),
                repo(101, "abc", "soup", None),
            ],
        };
        Self::new([google, abc])
    }
}

fn repo(id: u64, org: &str, name: &str, license: Option<(&str, &str, &str)>) -> Repo {
    Repo {
        id,
        name: name.to_string(),
        full_name: format!("{org}/{name}"),
        private: false,
        fork: false,
        license: license.map(|(key, name, spdx_id)| License {
            key: key.to_string(),
            name: name.to_string(),
            spdx_id: spdx_id.to_string(),
        }),
    }
}

pub type Db = Arc<Fixtures>;

pub fn app() -> Router {
    app_with(Fixtures::sample())
}

pub fn app_with(fixtures: Fixtures) -> Router {
    let db: Db = Arc::new(fixtures);
    Router::new()
        .route("/orgs/{org}", get(get_org))
        .route("/orgs/{org}/repos", get(list_repos))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, fixtures: Fixtures) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(fixtures)).await
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;

fn not_found(org: &str) -> (StatusCode, Json<Value>) {
    warn!(org, "unknown organization");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest",
        })),
    )
}

async fn get_org(
    State(db): State<Db>,
    Path(org): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Org> {
    let record = db.get(&org).ok_or_else(|| not_found(&org))?;
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let url = format!("http://{host}/orgs/{}", record.login);
    debug!(org = %org, "serving organization");
    Ok(Json(Org {
        login: record.login.clone(),
        id: record.id,
        repos_url: format!("{url}/repos"),
        url,
        description: record.description.clone(),
        public_repos: record.repos.iter().filter(|r| !r.private).count(),
    }))
}

async fn list_repos(State(db): State<Db>, Path(org): Path<String>) -> ApiResult<Vec<Repo>> {
    let record = db.get(&org).ok_or_else(|| not_found(&org))?;
    debug!(org = %org, count = record.repos.len(), "serving repositories");
    Ok(Json(record.repos.iter().filter(|r| !r.private).cloned().collect()))
}

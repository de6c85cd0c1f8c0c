//! Mock RDepot server utilities

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Value, json};

use rdepot::client::RDepotClient;
use rdepot::config::{RDepotConfig, Technology};

pub const TOKEN: &str = "validtoken";

/// Client pointed at the mock server, authenticated with [`TOKEN`]
pub fn create_test_client(server: &ServerGuard, technology: Technology) -> RDepotClient {
    RDepotClient::new(RDepotConfig {
        host: server.url(),
        token: Some(TOKEN.to_string()),
        technology,
    })
}

/// Manager API record with only the identifying fields set
pub fn package_record(id: u64, name: &str, version: &str, repository: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "version": version,
        "technology": "R",
        "repository": { "id": 1, "name": repository, "publicationUri": null },
        "active": true,
        "deleted": false
    })
}

/// Manager API response body for one page of a listing
pub fn page_body(records: &[Value], page: u32, total_pages: u32) -> String {
    json!({
        "status": "SUCCESS",
        "code": 200,
        "data": {
            "content": records,
            "page": {
                "size": records.len(),
                "totalElements": records.len(),
                "totalPages": total_pages,
                "number": page
            }
        }
    })
    .to_string()
}

/// Serve `pages` of the R package listing of `repository`, one mock per page
pub async fn mock_listing(
    server: &mut ServerGuard,
    repository: &str,
    pages: Vec<Vec<Value>>,
) -> Vec<Mock> {
    let total_pages = pages.len().saturating_sub(1) as u32;
    let mut mocks = Vec::new();

    for (page, records) in pages.iter().enumerate() {
        let mock = server
            .mock("GET", "/api/v2/manager/r/packages")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), page.to_string()),
                Matcher::UrlEncoded("repository".into(), repository.into()),
            ]))
            .match_header("authorization", format!("Bearer {TOKEN}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_body(records, page as u32, total_pages))
            .create_async()
            .await;
        mocks.push(mock);
    }

    mocks
}

/// Expect one soft delete of package `id`
pub async fn mock_delete(server: &mut ServerGuard, id: u64, status: usize) -> Mock {
    server
        .mock("PATCH", format!("/api/v2/manager/r/packages/{id}").as_str())
        .match_header("content-type", "application/json-patch+json")
        .match_body(Matcher::Json(json!([
            { "op": "replace", "path": "/deleted", "value": true }
        ])))
        .with_status(status)
        .expect(1)
        .create_async()
        .await
}

//! RDepot manager API implementation

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{RequestBuilder, Url};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::client::error::ClientError;
use crate::client::page::{Page, PageMeta, PageSource};
use crate::client::remover::PackageRemover;
use crate::config::{RDepotConfig, Technology};
use crate::package::Package;

const API_PREFIX: &str = "api/v2/manager";

/// Technology assumed for records that do not report one
const FALLBACK_TECHNOLOGY: &str = "r";

/// JSON Patch soft-deleting a package
const DELETE_PATCH: &str = r#"[{"op":"replace","path":"/deleted","value":true}]"#;

/// Response envelope of the manager API
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    data: T,
}

/// Paginated `data` payload
#[derive(Debug, Deserialize)]
struct PagedContent<T> {
    #[serde(default = "Vec::new")]
    content: Vec<T>,
    #[serde(default)]
    page: PageMeta,
}

/// Client for the RDepot manager API
pub struct RDepotClient {
    client: reqwest::Client,
    config: RDepotConfig,
}

impl RDepotClient {
    pub fn new(config: RDepotConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("rdepot-cli/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }

    pub fn config(&self) -> &RDepotConfig {
        &self.config
    }

    /// Paginated package listing, optionally restricted to one repository
    pub fn packages(&self, repository: Option<&str>) -> PackageListing<'_> {
        PackageListing {
            client: self,
            repository: repository.map(str::to_string),
        }
    }

    fn base_url(&self) -> &str {
        self.config.host.trim_end_matches('/')
    }

    fn packages_url(&self) -> String {
        match self.config.technology.path_segment() {
            Some(technology) => format!(
                "{}/{}/{}/packages",
                self.base_url(),
                API_PREFIX,
                technology
            ),
            None => format!("{}/{}/packages", self.base_url(), API_PREFIX),
        }
    }

    fn package_url(&self, package: &Package) -> String {
        let technology = match self.config.technology {
            Technology::All => package
                .technology
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_else(|| FALLBACK_TECHNOLOGY.to_string()),
            technology => technology.as_str().to_string(),
        };
        format!(
            "{}/{}/{}/packages/{}",
            self.base_url(),
            API_PREFIX,
            technology,
            package.id
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// One repository's (or every repository's) package listing
pub struct PackageListing<'a> {
    client: &'a RDepotClient,
    repository: Option<String>,
}

impl PackageListing<'_> {
    fn page_url(&self, page: u32) -> Result<Url, ClientError> {
        let page = page.to_string();
        let mut query = vec![("page", page.as_str())];
        if let Some(repository) = &self.repository {
            query.push(("repository", repository.as_str()));
        }

        Url::parse_with_params(&self.client.packages_url(), &query)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl PageSource<Package> for PackageListing<'_> {
    async fn fetch_page(&self, page: u32) -> Result<Page<Package>, ClientError> {
        let url = self.page_url(page)?;
        debug!("Fetching packages page {} from {}", page, url);

        let request = self
            .client
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json");
        let response = self.client.authorize(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("RDepot returned status {}: {}", status, url);
            return Err(ClientError::Status { status });
        }

        let body: ApiResponse<PagedContent<Package>> = response.json().await.map_err(|e| {
            warn!("Failed to parse RDepot package listing: {}", e);
            ClientError::InvalidResponse(e.to_string())
        })?;

        debug!(
            "Received {} packages on page {} of {}",
            body.data.content.len(),
            page,
            body.data.page.total_pages
        );

        Ok(Page {
            items: body.data.content,
            meta: body.data.page,
        })
    }
}

#[async_trait]
impl PackageRemover for RDepotClient {
    async fn delete_package(&self, package: &Package) -> Result<(), ClientError> {
        let url = self.package_url(package);
        debug!("Deleting package {} at {}", package.id, url);

        let request = self
            .client
            .patch(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json-patch+json")
            .body(DELETE_PATCH);
        let response = self.authorize(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("RDepot returned status {}: {}", status, url);
            return Err(ClientError::Status { status });
        }

        info!(
            "Deleted package {} ({} {})",
            package.id, package.name, package.version
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::page::fetch_all;
    use crate::version::Version;
    use mockito::{Matcher, Server};

    fn client_for(host: String, technology: Technology) -> RDepotClient {
        RDepotClient::new(RDepotConfig {
            host,
            token: Some("validtoken".to_string()),
            technology,
        })
    }

    const EMPTY_PAGE: &str = r#"{
        "status": "SUCCESS",
        "code": 200,
        "message": "Your request has been processed successfully.",
        "messageCode": "success.request.processed",
        "data": {
            "links": [],
            "content": [],
            "page": { "size": 0, "totalElements": 0, "totalPages": 0, "number": 0 }
        }
    }"#;

    const ACCRUED_PAGE: &str = r#"{
        "status": "SUCCESS",
        "code": 200,
        "data": {
            "content": [
                {
                    "id": 8,
                    "repository": { "id": 3, "name": "testrepo2", "publicationUri": "http://localhost/repo/testrepo2" },
                    "submissionId": 6,
                    "name": "accrued",
                    "version": "1.2",
                    "active": true,
                    "deleted": false
                }
            ],
            "page": { "size": 1, "totalElements": 1, "totalPages": 0, "number": 0 }
        }
    }"#;

    #[tokio::test]
    async fn fetch_page_returns_empty_page() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/manager/packages")
            .match_query(Matcher::UrlEncoded("page".into(), "0".into()))
            .match_header("authorization", "Bearer validtoken")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(EMPTY_PAGE)
            .create_async()
            .await;

        let client = client_for(server.url(), Technology::All);
        let page = client.packages(None).fetch_page(0).await.unwrap();

        mock.assert_async().await;

        assert!(page.items.is_empty());
        assert_eq!(page.meta, PageMeta::default());
    }

    #[tokio::test]
    async fn fetch_page_parses_packages() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/manager/r/packages")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "0".into()),
                Matcher::UrlEncoded("repository".into(), "testrepo2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(ACCRUED_PAGE)
            .create_async()
            .await;

        let client = client_for(server.url(), Technology::R);
        let page = client
            .packages(Some("testrepo2"))
            .fetch_page(0)
            .await
            .unwrap();

        mock.assert_async().await;

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "accrued");
        assert_eq!(page.items[0].version, Version::parse("1.2").unwrap());
        assert_eq!(page.meta.total_elements, 1);
    }

    #[tokio::test]
    async fn fetch_page_returns_status_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/manager/packages")
            .match_query(Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let client = client_for(server.url(), Technology::All);
        let result = client.packages(None).fetch_page(0).await;

        mock.assert_async().await;

        assert!(matches!(
            result,
            Err(ClientError::Status { status }) if status == reqwest::StatusCode::UNAUTHORIZED
        ));
    }

    #[tokio::test]
    async fn fetch_page_rejects_unparsable_version() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/manager/packages")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"data": {"content": [{"id": 1, "name": "broken", "version": "alpha.1"}],
                    "page": {"size": 1, "totalElements": 1, "totalPages": 0, "number": 0}}}"#,
            )
            .create_async()
            .await;

        let client = client_for(server.url(), Technology::All);
        let result = client.packages(None).fetch_page(0).await;

        mock.assert_async().await;

        assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_page_handles_network_error() {
        let client = client_for(
            "http://invalid.localhost.test:99999".to_string(),
            Technology::All,
        );
        let result = client.packages(None).fetch_page(0).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn fetch_all_requests_every_page() {
        let mut server = Server::new_async().await;
        let mut mocks = Vec::new();
        for page in 0..3 {
            let body = format!(
                r#"{{"data": {{"content": [{{"id": {page}, "name": "pkg{page}", "version": "1.{page}"}}],
                    "page": {{"size": 1, "totalElements": 3, "totalPages": 2, "number": {page}}}}}}}"#
            );
            let mock = server
                .mock("GET", "/api/v2/manager/packages")
                .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create_async()
                .await;
            mocks.push(mock);
        }

        let client = client_for(server.url(), Technology::All);
        let packages = fetch_all(&client.packages(None)).await.unwrap();

        for mock in &mocks {
            mock.assert_async().await;
        }

        let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["pkg0", "pkg1", "pkg2"]);
    }

    #[tokio::test]
    async fn delete_package_sends_json_patch() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/v2/manager/python/packages/42")
            .match_header("content-type", "application/json-patch+json")
            .match_header("authorization", "Bearer validtoken")
            .match_body(Matcher::JsonString(DELETE_PATCH.to_string()))
            .with_status(200)
            .create_async()
            .await;

        let mut package = Package::new(42, "numpy", Version::parse("1.0").unwrap());
        package.technology = Some("Python".to_string());

        let client = client_for(server.url(), Technology::All);
        client.delete_package(&package).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_package_returns_status_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/v2/manager/r/packages/8")
            .with_status(403)
            .create_async()
            .await;

        let package = Package::new(8, "accrued", Version::parse("1.2").unwrap());

        let client = client_for(server.url(), Technology::R);
        let result = client.delete_package(&package).await;

        mock.assert_async().await;

        assert!(matches!(result, Err(ClientError::Status { .. })));
    }

    #[test]
    fn package_url_falls_back_to_r_for_records_without_technology() {
        let client = client_for("http://localhost/".to_string(), Technology::All);
        let package = Package::new(3, "accrued", Version::parse("1.2").unwrap());

        assert_eq!(
            client.package_url(&package),
            "http://localhost/api/v2/manager/r/packages/3"
        );
    }
}

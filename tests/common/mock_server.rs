//! Fake websites for `/api/website` tests.

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// A local web server serving canned pages
pub struct MockSite {
    server: MockServer,
}

impl MockSite {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Absolute URL of a page on this site
    pub fn page_url(&self, page: &str) -> String {
        format!("{}{}", self.server.uri(), page)
    }

    /// Serve `html` at `page`
    pub async fn serve_page(&self, page: &str, html: &str) {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html; charset=utf-8")
                    .set_body_string(html),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer `page` with an error status
    pub async fn fail_page(&self, page: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

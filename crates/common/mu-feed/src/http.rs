use async_trait::async_trait;
use mu_models::{Category, RegistryRecord, UpdateEntry};
use tracing::{debug, instrument};
use url::Url;

use crate::{DeviceRegistry, Error, FeedSource, Result};

/// Fetches feeds and registry documents over HTTPS.
///
/// No retries and no timeout beyond the client defaults; a failed request is
/// returned to the caller as is.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    feeds_base: Url,
    registry_base: Url,
}

impl HttpSource {
    pub fn new(feeds_base: Url, registry_base: Url) -> Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(concat!("mu-poster/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            feeds_base,
            registry_base,
        })
    }

    pub fn feed_url(&self, category: Category) -> Result<Url> {
        Ok(self.feeds_base.join(&category.feed_path())?)
    }

    pub fn registry_url(&self, base_codename: &str) -> Result<Url> {
        Ok(self.registry_base.join(&format!("{}.json", base_codename))?)
    }
}

#[async_trait]
impl FeedSource for HttpSource {
    #[instrument(skip(self))]
    async fn fetch_feed(&self, category: Category) -> Result<Vec<UpdateEntry>> {
        let url = self.feed_url(category)?;
        debug!("Fetching {}", url);

        let entries: Vec<UpdateEntry> = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|source| Error::Fetch { category, source })?
            .json()
            .await
            .map_err(|source| Error::Fetch { category, source })?;

        debug!("Fetched {} entries", entries.len());
        Ok(entries)
    }
}

#[async_trait]
impl DeviceRegistry for HttpSource {
    #[instrument(skip(self))]
    async fn release_history(&self, base_codename: &str) -> Result<Option<Vec<RegistryRecord>>> {
        let url = self.registry_url(base_codename)?;
        debug!("Fetching {}", url);

        let registry_err = |source| Error::Registry {
            codename: base_codename.to_string(),
            source,
        };
        let body = self
            .client
            .get(url)
            .send()
            .await
            .map_err(registry_err)?
            .bytes()
            .await
            .map_err(registry_err)?;

        match serde_json::from_slice(&body) {
            Ok(records) => Ok(Some(records)),
            Err(e) => {
                debug!("Registry document for {} is not parseable: {}", base_codename, e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    use super::*;

    /// Answers a single request, handing back the request head.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&head).into_owned()
        });
        (base, handle)
    }

    fn local(base: &Url) -> HttpSource {
        HttpSource::new(base.clone(), base.join("registry/").unwrap()).unwrap()
    }

    fn source() -> HttpSource {
        HttpSource::new(
            Url::parse("https://raw.githubusercontent.com/XiaomiFirmwareUpdater/miui-updates-tracker/master/").unwrap(),
            Url::parse("https://raw.githubusercontent.com/XiaomiFirmwareUpdater/xiaomifirmwareupdater.github.io/master/data/devices/full/").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn feed_urls_follow_tracker_layout() {
        assert_eq!(
            source().feed_url(Category::StableRecovery).unwrap().as_str(),
            "https://raw.githubusercontent.com/XiaomiFirmwareUpdater/miui-updates-tracker/master/stable_recovery/stable_recovery.json"
        );
        assert_eq!(
            source().feed_url(Category::WeeklyFastboot).unwrap().as_str(),
            "https://raw.githubusercontent.com/XiaomiFirmwareUpdater/miui-updates-tracker/master/weekly_fastboot/weekly_fastboot.json"
        );
    }

    #[test]
    fn registry_url_uses_base_codename() {
        assert_eq!(
            source().registry_url("whyred").unwrap().as_str(),
            "https://raw.githubusercontent.com/XiaomiFirmwareUpdater/xiaomifirmwareupdater.github.io/master/data/devices/full/whyred.json"
        );
    }

    #[tokio::test]
    async fn fetch_feed_parses_entries() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"codename":"whyred_global","version":"V11.0.3.0.PEIMIXM","filename":"miui_HMNote5Global_V11.0.3.0.PEIMIXM_9.0.zip","size":"1.6G"}]"#,
        )
        .await;

        let entries = local(&base)
            .fetch_feed(Category::StableRecovery)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].codename, "whyred_global");
        assert_eq!(entries[0].extra["size"], "1.6G");

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /stable_recovery/stable_recovery.json "));
    }

    #[tokio::test]
    async fn fetch_feed_rejects_error_status() {
        let (base, server) = serve_once("404 Not Found", "404: Not Found").await;

        let err = local(&base)
            .fetch_feed(Category::WeeklyFastboot)
            .await
            .unwrap_err();
        match err {
            Error::Fetch { category, source } => {
                assert_eq!(category, Category::WeeklyFastboot);
                assert_eq!(source.status().map(|s| s.as_u16()), Some(404));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unparseable_registry_document_means_no_history() {
        let (base, server) = serve_once("404 Not Found", "404: Not Found").await;

        let history = local(&base).release_history("whyred").await.unwrap();
        assert_eq!(history, None);

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /registry/whyred.json "));
    }

    #[tokio::test]
    async fn registry_document_is_parsed() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"branch":"stable","type":"Global","versions":{"miui":"V11.0.3.0.PEIMIXM"}}]"#,
        )
        .await;

        let history = local(&base)
            .release_history("whyred")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].region, "Global");
        assert_eq!(history[0].versions.miui, "V11.0.3.0.PEIMIXM");
        server.await.unwrap();
    }
}

use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use serde::Deserialize;
use shared_kernel::http_client::HttpClient;
use shared_kernel::non_empty_string;
use url::Url;

use crate::errors::PrayerTimesError;

non_empty_string!(LocalityName);
non_empty_string!(LocalityId);

/// A place as the upstream site addresses it: slug-like name plus numeric id.
#[derive(Debug, Clone)]
pub struct Locality {
    pub name: LocalityName,
    pub id: LocalityId,
}

impl Locality {
    pub fn new(name: &str, id: &str) -> Result<Self, PrayerTimesError> {
        let name = name
            .try_into()
            .map_err(|_| PrayerTimesError::InvalidRequest)?;
        let id = id.try_into().map_err(|_| PrayerTimesError::InvalidRequest)?;
        Ok(Self { name, id })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    pub base_url: Url,
    pub timeout_secs: u64,
}

#[async_trait]
pub trait PrayerTimesSource: Send + Sync {
    /// Returns the raw HTML page holding the prayer times of `locality`.
    async fn fetch(&self, locality: &Locality) -> Result<String, PrayerTimesError>;
}

/// Reads prayer-time pages from namazvakitleri.diyanet.gov.tr, one GET per call.
pub struct DiyanetClient {
    base_url: Url,
    http_client: HttpClient,
}

impl DiyanetClient {
    pub fn new(settings: &UpstreamSettings) -> anyhow::Result<Self> {
        if settings.base_url.cannot_be_a_base() {
            bail!("Upstream base url {} cannot hold a path", settings.base_url);
        }
        let http_client = HttpClient::new(Duration::from_secs(settings.timeout_secs))
            .context("Failed to build the upstream http client")?;
        Ok(Self {
            base_url: settings.base_url.clone(),
            http_client,
        })
    }

    /// `{base_url}/tr-TR/{id}/{name}-icin-namaz-vakti`, each segment percent-encoded.
    pub fn page_url(&self, locality: &Locality) -> anyhow::Result<Url> {
        let page = format!("{}-icin-namaz-vakti", locality.name);
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Upstream base url {} cannot hold a path", self.base_url))?
            .pop_if_empty()
            .extend(["tr-TR", locality.id.as_ref(), page.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl PrayerTimesSource for DiyanetClient {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn fetch(&self, locality: &Locality) -> Result<String, PrayerTimesError> {
        let url = self
            .page_url(locality)
            .map_err(PrayerTimesError::UpstreamUnreachable)?;
        self.http_client
            .get_text(url)
            .await
            .map_err(|err| PrayerTimesError::UpstreamUnreachable(err.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(base_url: &str, timeout_secs: u64) -> DiyanetClient {
        DiyanetClient::new(&UpstreamSettings {
            base_url: Url::parse(base_url).unwrap(),
            timeout_secs,
        })
        .unwrap()
    }

    fn istanbul() -> Locality {
        Locality::new("istanbul", "9541").unwrap()
    }

    #[test]
    fn test_page_url_follows_the_upstream_scheme() {
        let client = client_for("https://namazvakitleri.diyanet.gov.tr", 10);
        assert_eq!(
            client.page_url(&istanbul()).unwrap().as_str(),
            "https://namazvakitleri.diyanet.gov.tr/tr-TR/9541/istanbul-icin-namaz-vakti"
        );
    }

    #[test]
    fn test_page_url_escapes_locality_segments() {
        let client = client_for("https://namazvakitleri.diyanet.gov.tr/", 10);
        let locality = Locality::new("new york", "12/3").unwrap();
        assert_eq!(
            client.page_url(&locality).unwrap().as_str(),
            "https://namazvakitleri.diyanet.gov.tr/tr-TR/12%2F3/new%20york-icin-namaz-vakti"
        );
    }

    #[test]
    fn test_blank_locality_parts_are_invalid() {
        assert!(matches!(
            Locality::new("", "9541"),
            Err(PrayerTimesError::InvalidRequest)
        ));
        assert!(matches!(
            Locality::new("istanbul", " "),
            Err(PrayerTimesError::InvalidRequest)
        ));
    }

    #[test]
    fn test_base_url_without_a_path_is_rejected() {
        let settings = UpstreamSettings {
            base_url: Url::parse("mailto:someone@example.com").unwrap(),
            timeout_secs: 1,
        };
        assert!(DiyanetClient::new(&settings).is_err());
    }

    #[tokio::test]
    async fn test_page_is_fetched_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/tr-TR/9541/istanbul-icin-namaz-vakti");
                then.status(200)
                    .header("content-type", "text/html; charset=utf-8")
                    .body(include_str!("../fixtures/today.html"));
            })
            .await;

        let html = client_for(&server.base_url(), 5)
            .fetch(&istanbul())
            .await
            .unwrap();

        assert!(html.contains("today-pray-times-row"));
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_unreachable() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/tr-TR/9541/istanbul-icin-namaz-vakti");
                then.status(500);
            })
            .await;

        let result = client_for(&server.base_url(), 5).fetch(&istanbul()).await;

        assert!(matches!(result, Err(PrayerTimesError::UpstreamUnreachable(_))));
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_timeout_is_unreachable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/tr-TR/9541/istanbul-icin-namaz-vakti");
                then.status(200)
                    .body("late")
                    .delay(Duration::from_secs(3));
            })
            .await;

        let result = client_for(&server.base_url(), 1).fetch(&istanbul()).await;

        match result {
            Err(err @ PrayerTimesError::UpstreamUnreachable(_)) => {
                assert!(err.to_string().starts_with("Could not reach site: "));
            }
            other => panic!("expected an unreachable upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_unreachable() {
        let client = client_for("http://127.0.0.1:1", 1);
        let result = client.fetch(&istanbul()).await;
        assert!(matches!(result, Err(PrayerTimesError::UpstreamUnreachable(_))));
    }
}

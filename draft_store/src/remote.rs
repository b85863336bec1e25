use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::*;

use crate::{DraftArchive, DraftRecord, HistorySource, StoreError};

/// Writes drafts to an HTTP storage service, one POST per draft.
#[derive(Clone, Debug)]
pub struct RemoteArchive {
    client: reqwest::Client,
    save_url: String,
}

/// Reads the draft list from an HTTP storage service.
#[derive(Clone, Debug)]
pub struct RemoteHistory {
    client: reqwest::Client,
    list_url: String,
}

#[derive(Deserialize, Debug)]
struct ListResponse {
    #[serde(default)]
    emails: Vec<DraftRecord>,
}

fn client(timeout: Duration) -> Result<reqwest::Client, StoreError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

impl RemoteArchive {
    pub fn new(save_url: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        Ok(RemoteArchive {
            client: client(timeout)?,
            save_url: save_url.into(),
        })
    }
}

impl RemoteHistory {
    pub fn new(list_url: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        Ok(RemoteHistory {
            client: client(timeout)?,
            list_url: list_url.into(),
        })
    }
}

#[async_trait]
impl DraftArchive for RemoteArchive {
    async fn save(&self, record: &DraftRecord) -> Result<(), StoreError> {
        let resp = self.client.post(&self.save_url).json(record).send().await?;
        trace!("POST {} {:?}", self.save_url, resp);

        if !resp.status().is_success() {
            return Err(StoreError::Status {
                status: resp.status().as_u16(),
            });
        }
        debug!("saved draft purpose={:?}", record.purpose);
        Ok(())
    }
}

#[async_trait]
impl HistorySource for RemoteHistory {
    async fn list(&self) -> Result<Vec<DraftRecord>, StoreError> {
        let resp = self.client.get(&self.list_url).send().await?;
        trace!("GET {} {:?}", self.list_url, resp);

        if !resp.status().is_success() {
            return Err(StoreError::Status {
                status: resp.status().as_u16(),
            });
        }
        let data: ListResponse = resp.json().await?;
        debug!("listed {} drafts from {}", data.emails.len(), self.list_url);
        Ok(data.emails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

    fn archive(server: &MockServer) -> RemoteArchive {
        RemoteArchive::new(format!("{}/emails", server.uri()), Duration::from_secs(5)).unwrap()
    }

    fn history(server: &MockServer) -> RemoteHistory {
        RemoteHistory::new(format!("{}/emails", server.uri()), Duration::from_secs(5)).unwrap()
    }

    fn record() -> DraftRecord {
        DraftRecord {
            purpose: Some("Thank a colleague".to_string()),
            tone: Some("Warm".to_string()),
            details: Some("They covered my shift, \"twice\".".to_string()),
            draft: "Subject: Thank you\n\nHi Sam,\n...".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_posts_all_four_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(body_json(json!({
                "purpose": "Thank a colleague",
                "tone": "Warm",
                "details": "They covered my shift, \"twice\".",
                "draft": "Subject: Thank you\n\nHi Sam,\n..."
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        archive(&server).save(&record()).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_rejects_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = archive(&server).save(&record()).await.unwrap_err();
        assert!(matches!(err, StoreError::Status { status: 503 }));
        assert_eq!(err.to_string(), "storage endpoint answered 503");
    }

    #[tokio::test]
    async fn test_list_keeps_remote_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "emails": [
                    {"purpose": "b", "tone": "t", "details": "d", "draft": "second"},
                    {"purpose": "a", "tone": null, "details": "d", "draft": "first"}
                ]
            })))
            .mount(&server)
            .await;

        let records = history(&server).list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].draft, "second");
        assert_eq!(records[1].tone, None);
    }

    #[tokio::test]
    async fn test_list_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = history(&server).list().await.unwrap_err();
        assert!(matches!(err, StoreError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_list_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = history(&server).list().await.unwrap_err();
        assert!(matches!(err, StoreError::Http(_)));
    }

    /// Echoes back whatever was last POSTed, like a tiny storage service.
    struct Echo(std::sync::Mutex<Vec<serde_json::Value>>);

    impl Respond for Echo {
        fn respond(&self, req: &Request) -> ResponseTemplate {
            let mut saved = self.0.lock().unwrap();
            if req.method.as_str() == "POST" {
                saved.push(serde_json::from_slice(&req.body).unwrap());
                ResponseTemplate::new(201)
            } else {
                ResponseTemplate::new(200).set_body_json(json!({ "emails": saved.clone() }))
            }
        }
    }

    #[tokio::test]
    async fn test_saved_record_is_listed_unchanged() {
        let server = MockServer::start().await;
        Mock::given(path("/emails"))
            .respond_with(Echo(std::sync::Mutex::new(Vec::new())))
            .mount(&server)
            .await;

        archive(&server).save(&record()).await.unwrap();
        let records = history(&server).list().await.unwrap();
        assert_eq!(records, vec![record()]);
    }
}

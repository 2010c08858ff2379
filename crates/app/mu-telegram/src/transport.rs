use async_trait::async_trait;
use mu_settings::{BotToken, ChannelId};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Error, Result};

/// Status line returned by the messaging endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub reason: String,
}

#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Sends Markdown text to `chat` with link previews disabled.
    ///
    /// Any HTTP status is a successful send at this level; only failing to
    /// reach the endpoint is an error.
    async fn send_message(&self, chat: &ChannelId, text: &str) -> Result<TransportResponse>;
}

/// Telegram Bot API `sendMessage` client.
#[derive(Clone)]
pub struct TelegramBot {
    client: reqwest::Client,
    token: BotToken,
    send_message_url: Url,
}

impl TelegramBot {
    pub fn new(api_base: &Url, token: &BotToken) -> Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            send_message_url: send_message_url(api_base, token.expose())?,
            token: token.clone(),
        })
    }
}

impl std::fmt::Debug for TelegramBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramBot")
            .field(
                "send_message_url",
                &self.token.redact(self.send_message_url.as_str()),
            )
            .finish_non_exhaustive()
    }
}

// Built segment by segment: `Url::join` would read the `bot123:ABC` prefix as a scheme.
fn send_message_url(api_base: &Url, token: &str) -> Result<Url> {
    let mut url = api_base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::InvalidBaseUrl(api_base.to_string()))?
        .pop_if_empty()
        .push(&format!("bot{}", token))
        .push("sendMessage");
    Ok(url)
}

#[async_trait]
impl MessageTransport for TelegramBot {
    #[instrument(skip(self, text))]
    async fn send_message(&self, chat: &ChannelId, text: &str) -> Result<TransportResponse> {
        let params = [
            ("chat_id", chat.to_string()),
            ("text", text.to_string()),
            ("parse_mode", "Markdown".to_string()),
            ("disable_web_page_preview", "yes".to_string()),
        ];

        let response = self
            .client
            .post(self.send_message_url.clone())
            .query(&params)
            .send()
            .await
            // The request URL carries the token.
            .map_err(|e| Error::Send(e.without_url()))?;

        let status = response.status();
        debug!("sendMessage answered {}", status);
        Ok(TransportResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}

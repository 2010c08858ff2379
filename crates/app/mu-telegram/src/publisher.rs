use mu_settings::ChannelId;
use tracing::{error, info};

use crate::{
    error::Result,
    transport::{MessageTransport, TransportResponse},
};

/// How the messaging endpoint answered a send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// 400: bad recipient or a text the parser rejected.
    BadRequest,
    /// 401: the bot token was refused.
    Unauthorized,
    Failed { status: u16, reason: String },
}

impl From<TransportResponse> for Delivery {
    fn from(response: TransportResponse) -> Self {
        match response.status {
            200 => Delivery::Sent,
            400 => Delivery::BadRequest,
            401 => Delivery::Unauthorized,
            status => Delivery::Failed {
                status,
                reason: response.reason,
            },
        }
    }
}

/// Posts messages to one channel and logs the outcome.
///
/// Rejected sends are logged and returned, never raised.
pub struct Publisher<'a> {
    transport: &'a dyn MessageTransport,
    channel: &'a ChannelId,
    codename: &'a str,
}

impl<'a> Publisher<'a> {
    pub fn new(transport: &'a dyn MessageTransport, channel: &'a ChannelId, codename: &'a str) -> Self {
        Self {
            transport,
            channel,
            codename,
        }
    }

    pub async fn publish(&self, text: &str) -> Result<Delivery> {
        let response = self.transport.send_message(self.channel, text).await?;
        let delivery = Delivery::from(response);
        match &delivery {
            Delivery::Sent => info!("{}: Telegram message sent", self.codename),
            Delivery::BadRequest => error!("Bad recipient / wrong text format"),
            Delivery::Unauthorized => error!("Wrong / unauthorized token"),
            Delivery::Failed { status, reason } => {
                error!("Unknown error ({}), response: {}", status, reason)
            }
        }
        Ok(delivery)
    }
}

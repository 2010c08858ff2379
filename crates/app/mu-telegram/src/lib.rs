//! Telegram announcements for detected firmware updates.

mod error;
mod message;
mod publisher;
mod transport;

pub use error::{Error, Result};
pub use message::{UpdateKind, format_message};
pub use publisher::{Delivery, Publisher};
pub use transport::{MessageTransport, TelegramBot, TransportResponse};

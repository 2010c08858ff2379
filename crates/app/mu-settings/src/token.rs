/// Telegram bot token.
///
/// The token travels inside the `sendMessage` URL path, so anything that may
/// print a URL has to go through [`BotToken::redact`] first.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

const MASK: &str = "<redacted>";

impl BotToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building request URLs only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Numeric bot id in front of the `:`, which is public.
    pub fn bot_id(&self) -> &str {
        self.0.split(':').next().unwrap_or_default()
    }

    /// Replaces every occurrence of the token in `text`.
    pub fn redact(&self, text: &str) -> String {
        if self.0.is_empty() {
            return text.to_string();
        }
        text.replace(&self.0, &format!("{}:{}", self.bot_id(), MASK))
    }
}

impl std::fmt::Debug for BotToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BotToken({}:{})", self.bot_id(), MASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_shows_only_bot_id() {
        let token = BotToken::new("123456:SECRET");
        assert_eq!(format!("{:?}", token), "BotToken(123456:<redacted>)");
        assert_eq!(token.expose(), "123456:SECRET");
    }

    #[test]
    fn redact_masks_token_inside_urls() {
        let token = BotToken::new("123456:SECRET");
        assert_eq!(
            token.redact("https://api.telegram.org/bot123456:SECRET/sendMessage"),
            "https://api.telegram.org/bot123456:<redacted>/sendMessage"
        );
        assert_eq!(token.redact("no token here"), "no token here");
    }
}

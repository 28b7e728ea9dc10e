//! Chat API client methods

use super::ApiClient;
use crate::error::ClientError;
use crate::types::{ChatMessage, SendMessageRequest};

impl ApiClient {
    /// Fetch the message history
    pub async fn list_messages(&self) -> Result<Vec<ChatMessage>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/chat/messages");
        self.execute(req).await
    }

    /// Post a new message
    pub async fn send_message(
        &self,
        request: SendMessageRequest,
    ) -> Result<ChatMessage, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/chat/messages")
            .json(&request);
        self.execute(req).await
    }
}

use std::fmt::Display;

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use uuid::Uuid;

use super::*;

pub const REQUEST_FAILED_APOLOGY: &str =
    "Sorry, I encountered an error while processing your question. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(text: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            is_user,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }
}

pub fn welcome_text(file_name: &str) -> String {
    format!(
        "Great! I've successfully processed \"{file_name}\". You can now ask me questions about this document."
    )
}

/// The chat session: an append-only message log plus the two flags that gate
/// input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
    loading: bool,
    has_documents: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_documents(&self) -> bool {
        self.has_documents
    }

    pub fn input_enabled(&self) -> bool {
        self.has_documents && !self.loading
    }

    /// Whether `send(text)` would issue a request right now.
    pub fn accepts(&self, text: &str) -> bool {
        self.input_enabled() && !text.trim().is_empty()
    }

    /// Records the user's question and marks a request as in flight.
    ///
    /// Returns the trimmed question to submit, or `None` when the input is
    /// blank, a request is already pending, or no document has been uploaded.
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        if !self.accepts(text) {
            return None;
        }

        let question = text.trim().to_owned();
        self.messages.push(Message::user(question.clone()));
        self.loading = true;

        Some(question)
    }

    /// Appends the bot's reply for the pending question and clears loading.
    pub fn finish_send<E: Display>(&mut self, outcome: Result<QueryResponse, E>) {
        if !self.loading {
            warn!("Dropping an answer that arrived with no question pending");
            return;
        }

        let reply = match outcome {
            Ok(resp) => Message::bot(resp.answer_text()),
            Err(e) => {
                error!("Question failed: {e}");
                Message::bot(REQUEST_FAILED_APOLOGY)
            }
        };

        self.messages.push(reply);
        self.loading = false;
    }

    /// Sends `text` through `api` and records both sides of the exchange.
    /// Returns `false` if nothing was sent.
    pub async fn send<T: ClientTransport>(&mut self, api: &ApiClient<T>, text: &str) -> bool {
        let Some(question) = self.begin_send(text) else {
            return false;
        };

        let outcome = api.submit_question(&question).await;
        self.finish_send(outcome);

        true
    }

    pub fn on_document_accepted(&mut self, file_name: &str) {
        info!("Document {file_name} is ready for questions");

        self.has_documents = true;
        self.messages.push(Message::bot(welcome_text(file_name)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{client, MockTransport};

    fn with_document() -> Conversation {
        let mut convo = Conversation::new();
        convo.on_document_accepted("policy.pdf");
        convo
    }

    #[test]
    fn document_acceptance_enables_input_and_welcomes() {
        let convo = with_document();

        assert!(convo.has_documents());
        assert!(convo.input_enabled());
        assert_eq!(convo.messages().len(), 1);
        assert!(!convo.messages()[0].is_user);
        assert!(convo.messages()[0].text.contains("\"policy.pdf\""));
    }

    #[tokio::test]
    async fn answer_is_appended_after_question() {
        let api = client(MockTransport::default().respond(
            200,
            r#"{"answer": "Refunds within 30 days.", "success": true}"#,
        ));
        let mut convo = with_document();

        assert!(convo.send(&api, "  What is the refund policy? ").await);

        let texts: Vec<_> = convo.messages()[1..]
            .iter()
            .map(|m| (m.is_user, m.text.as_str()))
            .collect();
        assert_eq!(
            texts,
            vec![
                (true, "What is the refund policy?"),
                (false, "Refunds within 30 days.")
            ]
        );
        assert!(!convo.is_loading());
    }

    #[tokio::test]
    async fn blank_input_sends_nothing() {
        let api = client(MockTransport::default());
        let mut convo = with_document();

        assert!(!convo.send(&api, "").await);
        assert!(!convo.send(&api, "   ").await);

        assert_eq!(convo.messages().len(), 1);
        assert_eq!(api.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn nothing_is_sent_before_a_document_exists() {
        let api = client(MockTransport::default());
        let mut convo = Conversation::new();

        assert!(!convo.input_enabled());
        assert!(!convo.send(&api, "What is the refund policy?").await);

        assert!(convo.messages().is_empty());
        assert_eq!(api.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn server_error_appends_single_apology() {
        let api = client(MockTransport::default().respond(500, "boom"));
        let mut convo = with_document();

        assert!(convo.send(&api, "Hello?").await);

        assert_eq!(convo.messages().len(), 3);
        assert_eq!(convo.messages()[2].text, REQUEST_FAILED_APOLOGY);
        assert!(!convo.is_loading());
    }

    #[tokio::test]
    async fn transport_error_appends_single_apology() {
        let api = client(MockTransport::default().refuse());
        let mut convo = with_document();

        convo.send(&api, "Hello?").await;

        assert_eq!(convo.messages().last().unwrap().text, REQUEST_FAILED_APOLOGY);
        assert!(!convo.is_loading());
    }

    #[tokio::test]
    async fn empty_answer_uses_fallback() {
        let api = client(MockTransport::default().respond(200, r#"{"answer": ""}"#));
        let mut convo = with_document();

        convo.send(&api, "Hello?").await;

        assert_eq!(convo.messages().last().unwrap().text, NO_ANSWER_FALLBACK);
    }

    #[test]
    fn second_question_waits_for_the_first() {
        let mut convo = with_document();

        assert_eq!(convo.begin_send("first").as_deref(), Some("first"));
        assert!(convo.is_loading());
        assert_eq!(convo.begin_send("second"), None);
        assert_eq!(convo.messages().len(), 2);

        convo.finish_send::<NetworkError<std::io::Error>>(Ok(QueryResponse {
            answer: Some("one".into()),
            success: Some(true),
        }));
        assert!(convo.input_enabled());
        assert_eq!(convo.messages().len(), 3);
    }

    #[test]
    fn stray_answer_is_ignored() {
        let mut convo = with_document();

        convo.finish_send::<String>(Ok(QueryResponse::default()));

        assert_eq!(convo.messages().len(), 1);
    }

    #[test]
    fn message_ids_are_unique() {
        let mut convo = with_document();
        convo.on_document_accepted("faq.docx");

        assert_ne!(convo.messages()[0].id, convo.messages()[1].id);
    }
}

//! Integration tests for the assistant widget
//!
//! Drives full exchanges against a scripted endpoint and an in-memory store

use async_trait::async_trait;
use meridian::ai::{ChatEndpoint, ChatError, ChatRequest, ChatResponse, ChatResult};
use meridian::bridge::{MemoryStore, SessionStore};
use meridian::types::ChatMessage;
use meridian::widget::{ChatWidget, FAILED_REPLY, UNCLEAR_REPLY};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct ScriptedEndpoint {
    replies: Mutex<VecDeque<ChatResult<ChatResponse>>>,
    seen: Mutex<Vec<ChatRequest>>,
}

impl ScriptedEndpoint {
    fn new(replies: Vec<ChatResult<ChatResponse>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<ChatRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatEndpoint for ScriptedEndpoint {
    async fn complete(&self, request: &ChatRequest) -> ChatResult<ChatResponse> {
        self.seen.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left")
    }
}

fn ok(response: &str, thread_id: Option<&str>) -> ChatResult<ChatResponse> {
    Ok(ChatResponse {
        response: Some(response.to_string()),
        thread_id: thread_id.map(str::to_string),
    })
}

fn server_error() -> ChatResult<ChatResponse> {
    Err(ChatError::Status {
        status: 500,
        detail: "An error occurred".to_string(),
    })
}

fn widget_with_store() -> (ChatWidget<Arc<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (ChatWidget::new(Arc::clone(&store), "thread_id"), store)
}

mod exchange_tests {
    use super::*;

    #[tokio::test]
    async fn test_first_exchange_stores_thread() {
        let (mut widget, store) = widget_with_store();
        let endpoint = ScriptedEndpoint::new(vec![ok("I can't access account data here.", Some("t-1"))]);

        widget.set_input("What is my balance?");
        widget.send(&endpoint).await;

        let seen = endpoint.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            serde_json::to_value(&seen[0]).unwrap(),
            serde_json::json!({"prompt": "What is my balance?", "thread_id": null})
        );
        assert_eq!(
            widget.messages(),
            &[
                ChatMessage::user("What is my balance?"),
                ChatMessage::assistant("I can't access account data here."),
            ]
        );
        assert_eq!(store.get("thread_id"), Some("t-1".to_string()));
        assert!(!widget.is_pending());
    }

    #[tokio::test]
    async fn test_stored_thread_is_sent_verbatim() {
        let (mut widget, store) = widget_with_store();
        let endpoint = ScriptedEndpoint::new(vec![
            ok("first", Some("abc123")),
            ok("second", None),
        ]);

        widget.set_input("one");
        widget.send(&endpoint).await;
        widget.set_input("two");
        widget.send(&endpoint).await;

        let seen = endpoint.seen();
        assert_eq!(seen[0].thread_id, None);
        assert_eq!(seen[1].thread_id.as_deref(), Some("abc123"));
        // A reply without a thread id leaves the stored one alone
        assert_eq!(store.get("thread_id"), Some("abc123".to_string()));
    }

    #[tokio::test]
    async fn test_new_thread_overwrites_previous() {
        let (mut widget, store) = widget_with_store();
        store.set("thread_id", "old").unwrap();
        let endpoint = ScriptedEndpoint::new(vec![ok("hi", Some("new"))]);

        widget.set_input("hello");
        widget.send(&endpoint).await;

        assert_eq!(endpoint.seen()[0].thread_id.as_deref(), Some("old"));
        assert_eq!(store.get("thread_id"), Some("new".to_string()));
    }

    #[tokio::test]
    async fn test_blank_input_issues_no_request() {
        let (mut widget, _store) = widget_with_store();
        let endpoint = ScriptedEndpoint::new(vec![]);

        for blank in ["", "   ", "\n\t "] {
            widget.set_input(blank);
            widget.send(&endpoint).await;
        }

        assert!(endpoint.seen().is_empty());
        assert!(widget.messages().is_empty());
    }
}

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_server_error_appends_single_fallback() {
        let (mut widget, store) = widget_with_store();
        store.set("thread_id", "t-1").unwrap();
        let endpoint = ScriptedEndpoint::new(vec![server_error()]);

        widget.set_input("Am I eligible for a loan?");
        widget.send(&endpoint).await;

        assert_eq!(
            widget.messages(),
            &[
                ChatMessage::user("Am I eligible for a loan?"),
                ChatMessage::assistant(FAILED_REPLY),
            ]
        );
        assert_eq!(store.get("thread_id"), Some("t-1".to_string()));
        assert!(!widget.is_pending());
    }

    #[tokio::test]
    async fn test_malformed_body_counts_as_failure() {
        let (mut widget, _store) = widget_with_store();
        let decode = serde_json::from_str::<ChatResponse>("<html>").unwrap_err();
        let endpoint = ScriptedEndpoint::new(vec![Err(ChatError::Decode(decode))]);

        widget.set_input("hello");
        widget.send(&endpoint).await;

        assert_eq!(widget.messages().len(), 2);
        assert_eq!(widget.messages()[1].content, FAILED_REPLY);
    }

    #[tokio::test]
    async fn test_empty_reply_uses_unclear_fallback() {
        let (mut widget, _store) = widget_with_store();
        let endpoint = ScriptedEndpoint::new(vec![
            ok("", None),
            Ok(ChatResponse::default()),
        ]);

        widget.set_input("first");
        widget.send(&endpoint).await;
        widget.set_input("second");
        widget.send(&endpoint).await;

        assert_eq!(widget.messages()[1], ChatMessage::assistant(UNCLEAR_REPLY));
        assert_eq!(widget.messages()[3], ChatMessage::assistant(UNCLEAR_REPLY));
    }

    #[tokio::test]
    async fn test_user_can_resend_after_failure() {
        let (mut widget, _store) = widget_with_store();
        let endpoint = ScriptedEndpoint::new(vec![server_error(), ok("Here you go.", Some("t-2"))]);

        widget.set_input("rates?");
        widget.send(&endpoint).await;
        widget.set_input("rates?");
        widget.send(&endpoint).await;

        assert_eq!(endpoint.seen().len(), 2);
        assert_eq!(widget.messages().len(), 4);
        assert_eq!(widget.messages()[3].content, "Here you go.");
    }
}

mod reset_tests {
    use super::*;

    #[tokio::test]
    async fn test_reset_after_three_exchanges() {
        let (mut widget, store) = widget_with_store();
        let endpoint = ScriptedEndpoint::new(vec![
            ok("a", Some("t-1")),
            ok("b", Some("t-1")),
            ok("c", Some("t-1")),
        ]);

        for prompt in ["one", "two", "three"] {
            widget.set_input(prompt);
            widget.send(&endpoint).await;
        }
        assert_eq!(widget.messages().len(), 6);

        widget.reset();
        assert!(widget.messages().is_empty());
        assert_eq!(store.get("thread_id"), None);
    }

    #[tokio::test]
    async fn test_reset_on_fresh_widget_is_harmless() {
        let (mut widget, store) = widget_with_store();
        widget.reset();
        widget.reset();
        assert!(widget.messages().is_empty());
        assert_eq!(store.get("thread_id"), None);
    }

    #[tokio::test]
    async fn test_reply_after_close_is_discarded() {
        let (mut widget, store) = widget_with_store();
        let endpoint = ScriptedEndpoint::new(vec![ok("too late", Some("t-stale"))]);

        widget.set_open(true);
        widget.set_input("hello");
        let ticket = widget.begin_send().expect("send should start");
        widget.set_open(false);

        let outcome = endpoint.complete(ticket.request()).await;
        widget.finish_send(ticket, outcome);

        assert!(widget.messages().is_empty());
        assert_eq!(store.get("thread_id"), None);
        assert!(!widget.is_pending());

        // The next conversation starts without the stale thread
        let endpoint = ScriptedEndpoint::new(vec![ok("fresh", Some("t-new"))]);
        widget.set_open(true);
        widget.set_input("again");
        widget.send(&endpoint).await;
        assert_eq!(endpoint.seen()[0].thread_id, None);
        assert_eq!(widget.messages().len(), 2);
    }
}

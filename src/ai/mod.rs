//! AI module for the Meridian assistant widget
//!
//! The widget talks to a single remote chat endpoint. The conversation itself
//! (agent, tools, memory) lives on the server; this side only carries a prompt
//! and a thread id out and a reply back.
//!
//! # Architecture
//!
//! - `client` - wire types, error type and the `ChatEndpoint` seam
//! - `http` - reqwest-backed endpoint used by the app
//!
//! # Usage
//!
//! ```rust,no_run
//! use meridian::ai::{ChatEndpoint, ChatRequest, HttpEndpoint};
//!
//! # async fn example() -> meridian::ai::ChatResult<()> {
//! let endpoint = HttpEndpoint::new("http://localhost:8000/chat");
//! let reply = endpoint
//!     .complete(&ChatRequest::new("Hello!", None))
//!     .await?;
//! println!("{:?}", reply.response);
//! # Ok(())
//! # }
//! ```
mod client;
mod http;

pub use client::{ChatEndpoint, ChatError, ChatRequest, ChatResponse, ChatResult};
pub use http::HttpEndpoint;

pub mod chat;

pub use chat::AskAi;

mod chat_input;
mod chat_window;
mod header;
mod message_bubble;
mod upload_modal;

pub use chat_input::ChatInput;
pub use chat_window::ChatWindow;
pub use header::Header;
pub use message_bubble::MessageBubble;
pub use upload_modal::UploadModal;

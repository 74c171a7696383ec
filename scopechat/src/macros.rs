//! Message construction macros, exported at the crate root.

/// Creates a user message
#[macro_export]
macro_rules! user {
    ($content:expr) => {
        $crate::__private::types::ChatMessage::user($content).build()
    };
}

/// Creates a system message
#[macro_export]
macro_rules! system {
    ($content:expr) => {
        $crate::__private::types::ChatMessage::system($content).build()
    };
}

/// Creates an assistant message
#[macro_export]
macro_rules! assistant {
    ($content:expr) => {
        $crate::__private::types::ChatMessage::assistant($content).build()
    };
}

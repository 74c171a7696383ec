//! Default values shared across providers.

pub mod http {
    use std::time::Duration;

    /// Overall request timeout. Streaming calls can be long-lived, so this is generous.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    pub const USER_AGENT: &str = concat!("scopechat/", env!("CARGO_PKG_VERSION"));
}

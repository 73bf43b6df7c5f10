// Version tracking, also used as the HTTP user agent

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn user_agent() -> String {
    format!("docsearch-agent/{}", VERSION)
}

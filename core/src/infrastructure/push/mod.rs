pub mod http_push_client;

pub use http_push_client::HttpPushClient;

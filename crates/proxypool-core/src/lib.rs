// Domain modules
pub mod config;
pub mod error;
pub mod one_proxy;
pub mod proxy;
pub mod query;
pub mod speed;
pub mod table;

pub use config::ProxyPoolConfig;
pub use error::{ProxyPoolError, Result};
pub use one_proxy::{OneProxyRequest, ONE_PROXY_PATH, SPEED_PARAM};
pub use proxy::{format_detected_at, Category, Proxy, ProxyCategory, ProxyListResponse};
pub use query::{visible_projection, ColumnFilters, SortField, SortOrder, Sorter};
pub use speed::SpeedBucket;
pub use table::{LoadState, ProxyTable};

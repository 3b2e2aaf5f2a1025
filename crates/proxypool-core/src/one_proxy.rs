use crate::{Category, SpeedBucket};
use serde::{Deserialize, Serialize};

/// Path of the backend's "one available proxy" endpoint
pub const ONE_PROXY_PATH: &str = "/proxies/one";

/// Query name for the speed bucket. The misspelling is what deployed
/// clients send, so it is kept.
pub const SPEED_PARAM: &str = "spped";

pub const CATEGORY_PARAM: &str = "category";

/// Selection from the "Get available proxy" widget. `None` is the default
/// "any" choice and adds no query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneProxyRequest {
    pub category: Option<Category>,
    pub speed: Option<SpeedBucket>,
}

impl OneProxyRequest {
    pub fn new(category: Option<Category>, speed: Option<SpeedBucket>) -> Self {
        Self { category, speed }
    }

    pub fn query(&self) -> Option<String> {
        let mut params = Vec::with_capacity(2);
        if let Some(category) = self.category {
            params.push(format!("{}={}", CATEGORY_PARAM, category.as_str()));
        }
        if let Some(speed) = self.speed {
            params.push(format!("{}={}", SPEED_PARAM, speed.as_param()));
        }
        (!params.is_empty()).then(|| params.join("&"))
    }

    pub fn url(&self, origin: &str) -> String {
        self.url_with_path(origin, ONE_PROXY_PATH)
    }

    pub fn url_with_path(&self, origin: &str, path: &str) -> String {
        let base = format!("{}{}", origin.trim_end_matches('/'), path);
        match self.query() {
            Some(q) => format!("{}?{}", base, q),
            None => base,
        }
    }
}

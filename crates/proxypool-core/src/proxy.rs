//! Proxy record as served by `GET /proxies`

use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Proxy protocol type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Http,
    Https,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Http => "http",
            Category::Https => "https",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "http" => Some(Category::Http),
            "https" => Some(Category::Https),
            _ => None,
        }
    }

    pub fn all() -> &'static [Category] {
        &[Category::Http, Category::Https]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Category as reported by the pool. The crawlers store whatever the source
/// site printed, so values other than plain http/https are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProxyCategory {
    Known(Category),
    Other(String),
}

impl ProxyCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ProxyCategory::Known(c) => c.as_str(),
            ProxyCategory::Other(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<Category> {
        match self {
            ProxyCategory::Known(c) => Some(*c),
            ProxyCategory::Other(_) => None,
        }
    }
}

impl Default for ProxyCategory {
    fn default() -> Self {
        ProxyCategory::Other(String::new())
    }
}

impl From<Category> for ProxyCategory {
    fn from(category: Category) -> Self {
        ProxyCategory::Known(category)
    }
}

impl PartialEq<Category> for ProxyCategory {
    fn eq(&self, other: &Category) -> bool {
        self.known() == Some(*other)
    }
}

impl std::fmt::Display for ProxyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for ProxyCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProxyCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(match Category::from_str(raw.trim()) {
            Some(c) => ProxyCategory::Known(c),
            None => ProxyCategory::Other(raw),
        })
    }
}

/// One proxy server's metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proxy {
    #[serde(alias = "IP")]
    pub ip: String,
    #[serde(alias = "Port", default, deserialize_with = "lenient_port")]
    pub port: u16,
    /// Latency indicator, 0 when the server omits it
    #[serde(alias = "Speed", default, deserialize_with = "lenient_speed")]
    pub speed: u32,
    #[serde(alias = "Category", default)]
    pub category: ProxyCategory,
    #[serde(alias = "Anonymous", default)]
    pub anonymous: bool,
    /// Epoch seconds
    #[serde(alias = "DetectedAt", default)]
    pub detected_at: i64,
}

impl Proxy {
    pub fn address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    pub fn anonymous_label(&self) -> &'static str {
        if self.anonymous {
            "YES"
        } else {
            "NO"
        }
    }
}

/// Envelope of `GET /proxies`. Records that fail to parse are skipped
/// rather than failing the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyListResponse {
    #[serde(default, deserialize_with = "lenient_records")]
    pub proxies: Vec<Proxy>,
}

/// Formats an epoch-seconds timestamp as UTC `YYYY-MM-DD HH:MM:SS`.
pub fn format_detected_at(ts: i64) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortRepr {
    Number(i64),
    Text(String),
}

fn lenient_port<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    let port = match Option::<PortRepr>::deserialize(deserializer)? {
        Some(PortRepr::Number(n)) => u16::try_from(n).unwrap_or(0),
        Some(PortRepr::Text(s)) => s.trim().parse().unwrap_or(0),
        None => 0,
    };
    Ok(port)
}

fn lenient_speed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let speed = Option::<i64>::deserialize(deserializer)?.unwrap_or(0);
    Ok(u32::try_from(speed.max(0)).unwrap_or(u32::MAX))
}

fn lenient_records<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Proxy>, D::Error> {
    let records = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(records
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_speed_defaults_to_zero() {
        let p: Proxy = serde_json::from_str(
            r#"{"ip":"1.2.3.4","port":8080,"category":"http","anonymous":true,"detectedAt":100}"#,
        )
        .unwrap();
        assert_eq!(p.speed, 0);
        assert_eq!(p.port, 8080);
        assert_eq!(p.detected_at, 100);
        assert!(p.anonymous);
    }

    #[test]
    fn test_null_and_negative_speed() {
        let null: Proxy =
            serde_json::from_str(r#"{"ip":"a","port":1,"speed":null,"category":"https"}"#).unwrap();
        assert_eq!(null.speed, 0);

        let negative: Proxy =
            serde_json::from_str(r#"{"ip":"a","port":1,"speed":-3,"category":"https"}"#).unwrap();
        assert_eq!(negative.speed, 0);

        let given: Proxy =
            serde_json::from_str(r#"{"ip":"a","port":1,"speed":2,"category":"https"}"#).unwrap();
        assert_eq!(given.speed, 2);
    }

    #[test]
    fn test_port_as_string() {
        let p: Proxy =
            serde_json::from_str(r#"{"ip":"a","port":"3128","category":"http"}"#).unwrap();
        assert_eq!(p.port, 3128);

        let bad: Proxy =
            serde_json::from_str(r#"{"ip":"a","port":"x","category":"http"}"#).unwrap();
        assert_eq!(bad.port, 0);
    }

    #[test]
    fn test_capitalised_field_names() {
        let p: Proxy = serde_json::from_str(
            r#"{"IP":"5.6.7.8","Port":"80","Speed":1,"Category":"https","Anonymous":false,"DetectedAt":42}"#,
        )
        .unwrap();
        assert_eq!(p.ip, "5.6.7.8");
        assert_eq!(p.port, 80);
        assert_eq!(p.speed, 1);
        assert_eq!(p.category, Category::Https);
        assert_eq!(p.detected_at, 42);
    }

    #[test]
    fn test_unknown_category_kept_verbatim() {
        let p: Proxy =
            serde_json::from_str(r#"{"ip":"a","port":1,"category":"socks4/5"}"#).unwrap();
        assert_eq!(p.category, ProxyCategory::Other("socks4/5".to_string()));
        assert_eq!(p.category.known(), None);
        assert_eq!(p.category.to_string(), "socks4/5");

        let upper: Proxy = serde_json::from_str(r#"{"ip":"a","port":1,"category":"HTTP"}"#).unwrap();
        assert_eq!(upper.category, Category::Http);

        let missing: Proxy = serde_json::from_str(r#"{"ip":"a","port":1}"#).unwrap();
        assert_eq!(missing.category.as_str(), "");
    }

    #[test]
    fn test_mixed_categories_keep_every_record() {
        let resp: ProxyListResponse = serde_json::from_str(
            r#"{"proxies":[
                {"ip":"1.1.1.1","port":80,"category":"http"},
                {"ip":"2.2.2.2","port":8080,"category":"http, https"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(resp.proxies.len(), 2);
        assert_eq!(resp.proxies[0].category, Category::Http);
        assert_eq!(resp.proxies[1].category.as_str(), "http, https");
    }

    #[test]
    fn test_broken_record_dropped_alone() {
        let resp: ProxyListResponse = serde_json::from_str(
            r#"{"proxies":[{"ip":"1.1.1.1","port":80,"category":"https"},{"port":81},"junk"]}"#,
        )
        .unwrap();
        assert_eq!(resp.proxies.len(), 1);
        assert_eq!(resp.proxies[0].ip, "1.1.1.1");
    }

    #[test]
    fn test_category_serializes_as_string() {
        let p: Proxy = serde_json::from_str(r#"{"ip":"a","port":1,"category":"socks5"}"#).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["category"], "socks5");
    }

    #[test]
    fn test_response_without_proxies() {
        let empty: ProxyListResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.proxies.is_empty());

        let null: ProxyListResponse = serde_json::from_str(r#"{"proxies":null}"#).unwrap();
        assert!(null.proxies.is_empty());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::from_str("HTTPS"), Some(Category::Https));
        assert_eq!(Category::from_str("ftp"), None);
        assert_eq!(Category::Http.to_string(), "http");
    }

    #[test]
    fn test_format_detected_at() {
        assert_eq!(format_detected_at(0), "1970-01-01 00:00:00");
        assert_eq!(format_detected_at(1_575_158_400), "2019-12-01 00:00:00");
    }
}

pub mod header;
pub mod notification;
pub mod one_proxy_selector;
pub mod proxy_table;

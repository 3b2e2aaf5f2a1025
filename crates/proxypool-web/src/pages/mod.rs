pub mod proxy_list;

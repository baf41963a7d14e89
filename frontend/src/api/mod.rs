pub mod shop_api;

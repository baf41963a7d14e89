pub mod error_boundary;
pub mod navbar;
pub mod shop_components;
pub mod suspend_boundary;

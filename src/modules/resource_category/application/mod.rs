pub mod domain;
pub mod ports;
pub mod resource_category_use_cases;
pub mod service;

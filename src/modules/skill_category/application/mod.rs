pub mod domain;
pub mod ports;
pub mod service;
pub mod skill_category_use_cases;

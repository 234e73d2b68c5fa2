pub mod resource_categories;

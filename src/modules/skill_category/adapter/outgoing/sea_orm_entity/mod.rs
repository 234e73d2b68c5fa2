pub mod skill_categories;

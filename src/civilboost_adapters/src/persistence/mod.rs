pub mod hashmap_user_store;
pub mod postgres_user_store;


/// CRUD operations tests for all entities
pub mod crud_tests;

pub mod dialoguer_input;
pub mod table_view;
pub mod yaml_store;

pub mod line_input;
pub mod roster_store;
pub mod table_view;

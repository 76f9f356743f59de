pub mod equivalence_table;
pub mod text_comparator;

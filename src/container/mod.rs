pub mod hash_fn;
pub mod probe_table;

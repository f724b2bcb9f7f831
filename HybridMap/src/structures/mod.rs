pub mod hybrid_map;

mod store;

pub use store::{load_from_file, load_from_file_strict, load_from_str, PatternStoreFile};

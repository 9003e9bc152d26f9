pub mod indexed_min_pq;

pub use indexed_min_pq::IndexedMinPq;

pub mod frequency_table;
pub mod resident_set;

pub use frequency_table::FrequencyTable;
pub use resident_set::ResidentSet;

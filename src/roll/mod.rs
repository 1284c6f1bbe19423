//! Voter roll data model: canonical record schema, partition identity,
//! and the in-memory store the retrieval engine searches over.

pub mod partition;
pub mod record;
pub mod store;


pub use partition::PartitionKey;
pub use record::{VoterRecord, WardDocument};
pub use store::{PoolEntry, RecordStore, ALL_WARDS};

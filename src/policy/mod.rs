//! Built-in replacement policies.
//!
//! | Module   | Victim on a full miss          | On hit        |
//! |----------|--------------------------------|---------------|
//! | [`lru`]  | front (least recently touched) | move to back  |
//! | [`mru`]  | back (most recently touched)   | move to back  |
//! | [`fifo`] | front (earliest inserted)      | no-op         |
//! | [`lfu`]  | lowest access count            | no-op         |
//! | [`lifo`] | back (latest inserted)         | no-op         |

pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;

// Adapters layer: concrete implementations of the domain ports for external
// systems (storage, outbound notification).

pub mod memory;
pub mod notify;

pub mod bridge;
pub mod slots;

pub use slots::{FileSlotStore, MemorySlotStore, SlotStore};

//! Collections backing iterator frontiers.

mod cow_priority_queue;

pub use cow_priority_queue::CowPriorityQueue;

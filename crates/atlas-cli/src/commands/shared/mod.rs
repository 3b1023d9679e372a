pub mod limit;
pub mod slug;

pub mod categories;
pub mod dispatch;
pub mod list;
pub mod markup;
pub mod schema;
pub mod shared;
pub mod show;
pub mod validate;

mod command;
mod query;
mod store;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;
pub use self::store::ProductStore;

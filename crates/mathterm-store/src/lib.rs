pub mod store;

pub use store::JsonProfileStore;

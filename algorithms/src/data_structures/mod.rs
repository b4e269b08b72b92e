pub mod treap;

pub use treap::Treap;

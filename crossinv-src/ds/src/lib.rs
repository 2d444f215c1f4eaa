#[doc(inline)]
pub use avl_index::{self, *};

#[doc(inline)]
pub use input::{self, *};

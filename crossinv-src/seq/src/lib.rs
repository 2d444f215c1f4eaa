#[doc(inline)]
pub use inversion::{self, *};

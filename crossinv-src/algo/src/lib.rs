#[doc(inline)]
pub use cross_inversion::{self, *};

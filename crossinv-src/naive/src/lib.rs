//! Slow but obviously correct counterparts, for cross-checking.

#[doc(inline)]
pub use pair_count::{self, *};
#[doc(inline)]
pub use position_list::{self, *};

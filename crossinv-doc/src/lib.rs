//! Position indexing and inversion counting.
//!
//! - [`ds`]: an AVL tree mapping each value to the first position it was
//!   seen at.
//! - [`seq`]: inversion counting by merge sort.
//! - [`algo`]: counting pairs that two sequences order differently.
//! - [`io`]: length-prefixed integer input.
//!
//! ```
//! use crossinv::algo::cross_inversion;
//!
//! let a = [1, 3, 5, 2, 4, 6];
//! let b = [5, 6, 1, 4, 2, 3];
//! assert_eq!(cross_inversion(&a, &b).unwrap(), 9);
//! ```

#[doc(inline)]
pub use algo;
#[doc(inline)]
pub use ds;
#[doc(inline)]
pub use io;
#[doc(inline)]
pub use seq;

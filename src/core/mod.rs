//! Pure branch-to-link transformations. No I/O, no state: every function
//! is a plain mapping from input text to an output or `None`.

mod compose;
mod extract;
mod remote;

pub use compose::compose;
pub use extract::extract;
pub use remote::{build_branch_url, https_base_url};

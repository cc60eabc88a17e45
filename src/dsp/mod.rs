//! Sound transforms
//!
//! Five pure transforms over [`Sound`](crate::engine::Sound) values. None of
//! them mutate their inputs; each returns a freshly built sound.

mod chain;
mod echo;
mod mix;
mod pan;
mod reverse;
mod transform;
mod vocals;

pub use chain::TransformChain;
pub use echo::{echo, sample_delay};
pub use mix::mix;
pub use pan::pan;
pub use reverse::reverse;
pub use transform::{delay_from_secs, Transform};
pub use vocals::remove_vocals;

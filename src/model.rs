//! Wire models exchanged with LinkedIn and returned to browser clients.

pub mod job;
pub mod profile;

pub use job::*;
pub use profile::*;

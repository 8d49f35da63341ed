pub mod profile;
pub mod rules;

pub use profile::*;
pub use rules::*;

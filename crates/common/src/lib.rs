pub mod envelope;
pub mod types;
pub mod utils;

pub use envelope::Envelope;

pub mod envelope;
pub mod form;

pub use envelope::Envelope;

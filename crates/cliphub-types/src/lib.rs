mod clip;
mod envelope;

pub use clip::{Clip, ClipId};
pub use envelope::Envelope;

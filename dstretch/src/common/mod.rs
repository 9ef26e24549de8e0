pub(crate) mod color;
pub(crate) mod error;
#[cfg(test)]
pub(crate) mod test_utils;

pub use color::{greenness, luminance, Hsl};
pub use error::{Error, Result};

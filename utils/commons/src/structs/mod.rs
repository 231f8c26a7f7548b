use super::*;

pub use self::percentage::*;

mod percentage;

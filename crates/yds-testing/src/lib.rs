//! Testing utilities and harness for YDS components

pub mod testing;

pub use testing::*;

pub mod prelude {
    pub use crate::testing::*;
}

//! Command implementations.

pub mod classify;
pub mod generate;
pub mod recognize;

pub use self::classify::execute_classify;
pub use self::generate::execute_generate;
pub use self::recognize::execute_recognize;

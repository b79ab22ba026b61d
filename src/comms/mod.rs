pub mod protocol;
pub mod scanner;
pub mod transport;

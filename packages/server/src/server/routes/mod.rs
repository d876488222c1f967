// HTTP routes
pub mod generate;
pub mod health;
pub mod root;

pub use generate::*;
pub use health::*;
pub use root::*;

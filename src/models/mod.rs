pub mod market;
pub mod news;
pub mod response;
pub mod stock;

pub use market::*;
pub use news::*;
pub use response::*;
pub use stock::*;

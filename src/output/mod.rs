// Output generation module

pub mod diagram;
pub mod site;
pub mod templates;

pub use diagram::*;
pub use site::*;
pub use templates::*;

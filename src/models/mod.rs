mod category;
mod fields;
mod image;
mod product;
mod receipt;
mod response;
mod user;

pub use category::*;
pub use image::*;
pub use product::*;
pub use receipt::*;
pub use response::*;
pub use user::*;

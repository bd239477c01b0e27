pub mod io;
pub mod owned;
pub mod traits;
pub mod view;

pub use self::owned::Image;
pub use self::traits::{Raster, Rows};
pub use self::view::ImageRef;

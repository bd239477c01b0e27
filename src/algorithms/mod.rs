//! Concrete thresholding strategies plugging into the
//! [`Algorithm`](crate::algorithm::Algorithm) contract.
pub mod bernsen;
pub mod fixed;
pub mod otsu;

pub use self::bernsen::Bernsen;
pub use self::fixed::FixedThreshold;
pub use self::otsu::Otsu;

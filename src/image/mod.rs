pub mod gray;
pub mod io;
pub mod rgb;

pub use self::gray::GrayImageF32;
pub use self::rgb::RgbImageF32;

mod point;
mod ray;
mod vec;

pub use point::*;
pub use ray::*;
pub use vec::*;

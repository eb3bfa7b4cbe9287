mod scale;

pub use scale::ScaleToRadius;

pub mod dither;
pub mod frame;
pub mod palette;
pub mod pipeline;
pub mod resample;
pub mod surface;

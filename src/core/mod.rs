pub mod band_scale;
pub mod scale;
pub mod types;

pub use band_scale::BandScale;
pub use scale::{LinearScale, extent};
pub use types::{DataPoint, Margins, Region};

//! The four analysis routines: spectrum, blur metric, edge filter,
//! histogram equalisation
//!
//! Each routine is a pure function of its raster argument. Only the blur
//! metric depends on another routine (it consumes the amplitude spectrum).

pub mod blur;
pub mod edges;
pub mod equalize;
pub mod spectrum;

pub use blur::energy_ratio;
pub use edges::{LAPLACIAN_KERNEL, laplacian, laplacian_with_border};
pub use equalize::{EqualizationReport, equalize, equalize_in_place, equalize_with_report};
pub use spectrum::{MAG_EPSILON, spectrum};

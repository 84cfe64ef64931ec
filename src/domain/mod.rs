// Domain layer: grade scale, line-item models and ports. No I/O here.

pub mod grade_scale;
pub mod model;
pub mod ports;

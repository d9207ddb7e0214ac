#![forbid(unsafe_code)]

pub mod bbox;
pub mod cloud;
pub mod cloud_view;
pub mod traits;

pub use bbox::Aabb;
pub use cloud::PointCloud;
pub use cloud_view::CloudView;
pub use traits::PointPath;

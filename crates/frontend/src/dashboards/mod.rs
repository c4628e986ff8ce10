pub mod d400_occupancy;
pub mod d401_revenue;

pub use d400_occupancy::ui::OccupancyDashboard;
pub use d401_revenue::ui::RevenueDashboard;

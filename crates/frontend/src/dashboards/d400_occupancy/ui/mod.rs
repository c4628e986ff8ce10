pub mod dashboard;

pub use dashboard::OccupancyDashboard;

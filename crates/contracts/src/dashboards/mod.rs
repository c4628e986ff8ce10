pub mod d400_occupancy;
pub mod d401_revenue;
pub mod d402_results;

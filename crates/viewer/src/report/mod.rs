pub mod chart;
pub mod extract;
pub mod normalize;
pub mod state;
pub mod table;

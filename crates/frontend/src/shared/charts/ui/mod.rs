pub mod bar_chart;
pub mod chart_view;
pub mod comparison_chart;
pub mod pie_chart;
pub mod svg_scene;

pub use bar_chart::BarChart;
pub use comparison_chart::ComparisonChart;
pub use pie_chart::PieChart;

pub const CHART_WIDTH: usize = 80;
pub const CHART_HEIGHT: usize = 40;

pub const MIN_CHART_WIDTH: usize = 20;
pub const MIN_CHART_HEIGHT: usize = 10;

pub mod adjust_scan;
pub mod scan_food;

mod detector;
mod global;

// 导出常用项
pub use detector::TextDetector;
pub use global::{
    global_detect, global_detector, init_global_detector, init_global_detector_with_patterns,
};

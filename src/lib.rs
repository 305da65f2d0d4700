// 核心公共结构体（模式库+检测结果）
pub mod core;
// 检测器封装+全局单例
pub mod detector;
// 错误定义
pub mod error;
// 匹配器编译+执行核心逻辑
pub mod matcher;
// 模式库源解析 (JSON)
pub mod source;

// 顶层导出常用类型
pub use crate::core::{MatchResult, PatternSet};
pub use detector::{
    global_detect, global_detector, init_global_detector, init_global_detector_with_patterns,
    TextDetector,
};
pub use error::{FilterError, FilterResult};
pub use matcher::{CompiledMatcher, LiteralScanner, RegexScanner};
pub use source::{load_from_file, load_from_file_strict, load_from_str, PatternStoreFile};

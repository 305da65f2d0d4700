mod match_result;
mod pattern_set;

// 导出常用项
pub use match_result::MatchResult;
pub use pattern_set::PatternSet;

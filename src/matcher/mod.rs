mod compiled;
mod literal;
mod regex_union;

// 导出常用项
pub use compiled::CompiledMatcher;
pub use literal::LiteralScanner;
pub use regex_union::RegexScanner;

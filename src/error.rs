//! textfilter-engine 内核错误定义
//! 封装引擎层所有核心错误，与外部业务层错误解耦，基于thiserror实现类型安全处理
use thiserror::Error;

/// 引擎核心错误枚举
/// 所有错误携带足够上下文（模式文本、分类、文件路径），便于调用方定位并修复模式库
#[derive(Error, Debug)]
pub enum FilterError {
    // ===================== 模式库相关错误 =====================
    /// 模式库结构非法（文件存在但不是预期的 literals/regex 映射结构）
    /// 注意：与「文件不存在」严格区分，后者返回空模式库而非错误
    #[error("Malformed pattern store [{context}]: {source}")]
    MalformedPatternStore {
        /// 错误上下文（文件路径或"inline"）
        context: String,
        /// 底层JSON解析错误
        #[source]
        source: serde_json::Error,
    },

    // ===================== 编译相关错误 =====================
    /// 单条模式非法（空模式串/空分类/正则语法错误）
    /// 构建原子性：任何一条模式非法则整个Matcher构建失败
    #[error("Invalid pattern [{pattern}] (category: {category}): {reason}")]
    InvalidPattern {
        /// 非法的模式文本
        pattern: String,
        /// 该模式登记的分类
        category: String,
        /// 失败原因（正则编译错误信息或"empty pattern"）
        reason: String,
    },

    /// 字面量自动机构建失败（模式数量/自动机规模超限）
    #[error("Literal automaton build failed: {0}")]
    AutomatonBuildError(String),

    // ===================== 检测器相关错误 =====================
    /// 检测器初始化失败
    #[error("Detector initialization failed: {0}")]
    DetectorInitError(String),

    /// 检测器未初始化（调用全局检测器前未完成初始化）
    #[error("Detector not initialized: {0}")]
    DetectorNotInitialized(String),

    /// 检测器重载失败（旧Matcher继续生效）
    #[error("Detector reload failed: {0}")]
    DetectorReloadError(String),

    // ===================== 基础错误 =====================
    /// IO操作失败（供调用方自行读取模式文件时`?`转换；
    /// 引擎自带的容错加载路径将文件缺失/不可读映射为空模式库，不产生该错误）
    #[error("IO operation failed: {0}")]
    IoError(#[from] std::io::Error),
}

/// 引擎层全局Result类型别名
pub type FilterResult<T> = Result<T, FilterError>;

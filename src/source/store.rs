//! Pattern store source parsing
//! 模式库源解析
//! 持久化格式（UTF-8 JSON，由外部管理端生成）：
//!     {
//!         "literals": { "<模式文本>": "<分类>", ... },
//!         "regex":    { "<模式文本>": "<分类>", ... }
//!     }
//! 两个键均可缺省（缺省等价于空映射）；顶层仅允许这两个键

use std::io::ErrorKind;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::PatternSet;
use crate::error::{FilterError, FilterResult};

/// 模式库文件原始结构
/// deny_unknown_fields: 顶层出现未知键（如"literal"拼写错误）视为结构非法，
/// 避免整节模式被静默忽略后与「未配置模式」无法区分
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternStoreFile {
    /// literal 模式节：模式文本 → 分类
    #[serde(default)]
    pub literals: FxHashMap<String, String>,
    /// regex 模式节：模式文本 → 分类
    #[serde(default, rename = "regex")]
    pub regexes: FxHashMap<String, String>,
}

impl From<PatternStoreFile> for PatternSet {
    fn from(file: PatternStoreFile) -> Self {
        PatternSet {
            literals: file.literals,
            regexes: file.regexes,
        }
    }
}

/// 从JSON字符串解析模式库
/// 错误语义：
/// - 结构非法（非对象/节内非字符串映射/未知顶层键）→ MalformedPatternStore
/// - 空模式串/空分类 → InvalidPattern（加载期拒绝，不延迟到查询期）
pub fn load_from_str(content: &str) -> FilterResult<PatternSet> {
    parse_with_context(content, "inline")
}

/// 从文件加载模式库
/// 错误语义（区分三种情形，见错误定义）：
/// - 文件不存在/不可读 → 空模式库（空模式库检测恒为未检出）
/// - 文件存在但结构非法 → MalformedPatternStore（不降级为空，避免掩盖配置错误）
/// - 模式内容非法 → InvalidPattern
pub fn load_from_file<P: AsRef<Path>>(path: P) -> FilterResult<PatternSet> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!(
                "Pattern store not found, using empty set | Path: {}",
                path.display()
            );
            return Ok(PatternSet::default());
        }
        Err(e) => {
            log::warn!(
                "Pattern store unreadable, using empty set | Path: {} | Error: {}",
                path.display(),
                e
            );
            return Ok(PatternSet::default());
        }
    };

    parse_with_context(&content, &path.display().to_string())
}

/// 从文件严格加载模式库（IO错误不降级为空模式库）
/// 与load_from_file的区别：文件缺失/不可读 → IoError向调用方传播，
/// 适用于「模式文件必须存在」的部署场景
pub fn load_from_file_strict<P: AsRef<Path>>(path: P) -> FilterResult<PatternSet> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    parse_with_context(&content, &path.display().to_string())
}

/// 解析公共逻辑（携带上下文信息用于错误定位）
fn parse_with_context(content: &str, context: &str) -> FilterResult<PatternSet> {
    let file: PatternStoreFile =
        serde_json::from_str(content).map_err(|e| FilterError::MalformedPatternStore {
            context: context.to_string(),
            source: e,
        })?;

    let set: PatternSet = file.into();
    set.validate()?;

    log::debug!(
        "Pattern store loaded | Context: {} | Literals: {} | Regexes: {}",
        context,
        set.literals.len(),
        set.regexes.len()
    );
    Ok(set)
}

//! Literal multi-pattern scanner
//! 字面量多模式扫描器
//! 基于Aho-Corasick自动机实现：无论登记多少条字面量模式，
//! 单次线性遍历即可报告全部命中位置（含重叠命中）

use aho_corasick::{AhoCorasick, MatchKind};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{FilterError, FilterResult};

/// 字面量扫描器（不可变，构建后只读）
/// 设计说明：
/// - automaton: Aho-Corasick自动机（None表示空模式集，扫描为no-op）
/// - categories: 模式ID → 分类（与自动机内部模式编号对齐）
#[derive(Debug, Clone)]
pub struct LiteralScanner {
    automaton: Option<AhoCorasick>,
    categories: Vec<String>,
}

impl LiteralScanner {
    /// 构建字面量自动机
    /// 复杂度：O(全部模式文本总长度)
    /// 参数：literals - 字面量模式映射（模式文本 → 分类）
    /// 返回：扫描器实例 | 自动机构建错误
    pub fn build(literals: &FxHashMap<String, String>) -> FilterResult<Self> {
        if literals.is_empty() {
            return Ok(Self::empty());
        }

        let mut patterns = Vec::with_capacity(literals.len());
        let mut categories = Vec::with_capacity(literals.len());
        for (pattern, category) in literals {
            patterns.push(pattern.as_str());
            categories.push(category.clone());
        }

        // Standard语义 + find_overlapping_iter：报告全部命中（不在首个命中处截断）
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| FilterError::AutomatonBuildError(e.to_string()))?;

        Ok(Self {
            automaton: Some(automaton),
            categories,
        })
    }

    /// 空扫描器（扫描为no-op）
    pub fn empty() -> Self {
        Self {
            automaton: None,
            categories: Vec::new(),
        }
    }

    /// 登记的模式数量
    #[inline]
    pub fn pattern_count(&self) -> usize {
        self.categories.len()
    }

    /// 扫描输入并收集命中分类（单次遍历，重叠命中全部报告）
    /// 参数：
    /// - text: 待检测文本
    /// - hits: 命中分类收集器（原地插入）
    pub fn scan(&self, text: &str, hits: &mut FxHashSet<String>) {
        let Some(automaton) = &self.automaton else {
            return;
        };
        for m in automaton.find_overlapping_iter(text) {
            hits.insert(self.categories[m.pattern().as_usize()].clone());
        }
    }
}

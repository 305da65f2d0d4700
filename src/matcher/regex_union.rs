//! Regex union scanner
//! 正则联合扫描器
//! 设计目标：全部正则模式合并为单条带命名分组的交替式
//!     (?P<rg0>pat0)|(?P<rg1>pat1)|...
//! 配合「分组名 → 分类」侧表，单次扫描即可判定全部正则分类的命中情况。
//! 分组名始终为合成名（rg0/rg1/...），不取自用户模式文本，杜绝命名冲突。
//! 合并式编译失败（如超出编译规模上限）时回退为逐条独立扫描，语义等价仅性能不同。

use regex::{Regex, RegexBuilder};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{FilterError, FilterResult};

/// 单条/合并正则的编译规模上限（字节）
/// regex引擎为非回溯线性时间实现，查询期不存在灾难性回溯；
/// 编译期规模上限即为资源约束，超限在构建期报错而非查询期
const REGEX_SIZE_LIMIT: usize = 1 << 22;

/// 正则扫描策略（构建期一次性选定，不在查询期重新判定）
#[derive(Debug, Clone)]
pub enum RegexScanner {
    /// 无正则模式（扫描为no-op）
    Empty,
    /// 合并模式：单条交替式 + 分组名侧表（按声明顺序）
    Combined {
        regex: Regex,
        /// (合成分组名, 分类)，与交替式分支声明顺序一致
        groups: Vec<(String, String)>,
    },
    /// 回退模式：逐条独立编译的正则顺序扫描
    PerPattern { patterns: Vec<(Regex, String)> },
}

impl RegexScanner {
    /// 构建正则扫描器
    /// 构建原子性：任意一条模式编译失败则整体失败（InvalidPattern），
    /// 不静默丢弃坏模式（配置错误在构建期暴露，而非查询期漏报）
    pub fn build(regexes: &FxHashMap<String, String>) -> FilterResult<Self> {
        if regexes.is_empty() {
            return Ok(Self::Empty);
        }

        // 1. 逐条编译校验（同时作为回退模式的编译产物）
        let mut compiled = Vec::with_capacity(regexes.len());
        for (pattern, category) in regexes {
            let regex = compile_pattern(pattern).map_err(|e| FilterError::InvalidPattern {
                pattern: pattern.clone(),
                category: category.clone(),
                reason: e.to_string(),
            })?;
            compiled.push((regex, pattern.clone(), category.clone()));
        }

        // 2. 构建合并交替式（合成分组名，分支顺序与侧表一致）
        let mut parts = Vec::with_capacity(compiled.len());
        let mut groups = Vec::with_capacity(compiled.len());
        for (idx, (_, pattern, category)) in compiled.iter().enumerate() {
            let group = format!("rg{idx}");
            parts.push(format!("(?P<{group}>{pattern})"));
            groups.push((group, category.clone()));
        }
        let combined_source = parts.join("|");

        // 3. 合并式编译；失败则回退逐条扫描（每条已单独编译通过，仅合并规模超限）
        match compile_pattern(&combined_source) {
            Ok(regex) => Ok(Self::Combined { regex, groups }),
            Err(e) => {
                log::warn!(
                    "Combined regex compilation failed, falling back to per-pattern scan | Patterns: {} | Error: {}",
                    compiled.len(),
                    e
                );
                Ok(Self::PerPattern {
                    patterns: compiled
                        .into_iter()
                        .map(|(regex, _, category)| (regex, category))
                        .collect(),
                })
            }
        }
    }

    /// 登记的模式数量
    pub fn pattern_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Combined { groups, .. } => groups.len(),
            Self::PerPattern { patterns } => patterns.len(),
        }
    }

    /// 扫描策略描述（用于日志输出）
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Combined { .. } => "combined",
            Self::PerPattern { .. } => "per-pattern",
        }
    }

    /// 扫描输入并收集命中分类
    /// - Combined: 非重叠遍历全部匹配；每个匹配取声明顺序下首个非空命名分组
    /// - PerPattern: 逐条非锚定is_match（"模式是否出现在任意位置"语义）
    pub fn scan(&self, text: &str, hits: &mut FxHashSet<String>) {
        match self {
            Self::Empty => {}
            Self::Combined { regex, groups } => {
                for caps in regex.captures_iter(text) {
                    for (group, category) in groups {
                        if caps.name(group).is_some() {
                            hits.insert(category.clone());
                            break;
                        }
                    }
                }
            }
            Self::PerPattern { patterns } => {
                for (regex, category) in patterns {
                    if !hits.contains(category) && regex.is_match(text) {
                        hits.insert(category.clone());
                    }
                }
            }
        }
    }
}

/// 正则编译公共逻辑（统一规模上限）
fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
}

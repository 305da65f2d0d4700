//! Text detector core module
//! 文本检测器核心
//! 核心职责：
//! 1. 模式库加载与匹配器编译（显式路径参数，不隐式绑定固定文件）
//! 2. 检测接口封装（读锁取Arc引用，锁外执行匹配）
//! 3. 模式库重载：构建新匹配器后原子替换引用，旧匹配器在并发查询结束后自然释放

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::core::{MatchResult, PatternSet};
use crate::error::{FilterError, FilterResult};
use crate::matcher::CompiledMatcher;
use crate::source;

/// 文本检测器
/// 设计说明：
/// - matcher: RwLock<Arc<...>>，查询走读锁（仅克隆Arc），重载走写锁（仅替换指针）
/// - store_path: 模式库文件路径（with_patterns构造时为None，此时不支持重载）
/// - 匹配器本体不可变；重载总是构建新实例替换引用，绝不原地修改在查询中的结构
#[derive(Debug)]
pub struct TextDetector {
    matcher: RwLock<Arc<CompiledMatcher>>,
    store_path: Option<PathBuf>,
}

impl TextDetector {
    /// 从模式库文件创建检测器
    /// 文件缺失 → 空匹配器（检测恒为未检出）；文件结构非法/模式非法 → 构建失败
    pub fn from_store<P: AsRef<Path>>(path: P) -> FilterResult<Self> {
        let path = path.as_ref().to_path_buf();
        let set = source::load_from_file(&path)?;
        let matcher = CompiledMatcher::build(&set)?;

        log::info!(
            "Detector initialized from store | Path: {} | Patterns: {}",
            path.display(),
            matcher.pattern_count()
        );
        Ok(Self {
            matcher: RwLock::new(Arc::new(matcher)),
            store_path: Some(path),
        })
    }

    /// 从内存模式库创建检测器（无文件绑定，不支持reload）
    /// 适用场景：模式库由调用方自行管理加载
    pub fn with_patterns(set: &PatternSet) -> FilterResult<Self> {
        let matcher = CompiledMatcher::build(set)?;
        Ok(Self {
            matcher: RwLock::new(Arc::new(matcher)),
            store_path: None,
        })
    }

    /// 执行检测
    /// 读锁内仅克隆Arc（纳秒级），匹配在锁外执行，不阻塞并发重载
    pub fn detect(&self, text: &str) -> MatchResult {
        self.matcher().match_text(text)
    }

    /// 获取当前匹配器引用（Arc克隆，调用方可长期持有）
    pub fn matcher(&self) -> Arc<CompiledMatcher> {
        self.matcher
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// 重载模式库（模式文件被外部管理端修改后调用）
    /// 原子性：先完整构建新匹配器，成功后才替换引用；
    /// 任意阶段失败则旧匹配器继续生效，错误向调用方传播
    pub fn reload(&self) -> FilterResult<()> {
        let path = self.store_path.as_ref().ok_or_else(|| {
            FilterError::DetectorReloadError(
                "no store path configured (detector was built from an in-memory pattern set)"
                    .to_string(),
            )
        })?;

        let set = source::load_from_file(path)?;
        let new_matcher = Arc::new(CompiledMatcher::build(&set)?);
        let pattern_count = new_matcher.pattern_count();

        let mut guard = self
            .matcher
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = new_matcher;

        log::info!(
            "Detector reloaded | Path: {} | Patterns: {}",
            path.display(),
            pattern_count
        );
        Ok(())
    }
}

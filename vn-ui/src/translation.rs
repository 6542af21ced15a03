//! # Translation 模块
//!
//! 源语言 UI 文本到本地化文本的映射表。
//!
//! 查找是全函数：表中没有的键原样返回，因此不需要为每条文本预先填充译文。
//! 翻译表在启动时从静态配置填充一次，之后只读。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::TranslationError;

/// 翻译表
///
/// 文件格式为扁平 JSON 对象：`{ "Start Game": "开始游戏", ... }`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// 创建空表（所有查找都回退为原文）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从键值对构建
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 从 JSON 文本解析
    pub fn from_json_str(content: &str) -> Result<Self, TranslationError> {
        serde_json::from_str(content).map_err(|e| TranslationError::Parse(e.to_string()))
    }

    /// 从 JSON 文件加载
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, TranslationError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TranslationError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    /// 添加一条译文
    ///
    /// 只应在启动阶段（放入 `AppContext` 之前）调用。
    pub fn insert(&mut self, source: impl Into<String>, localized: impl Into<String>) {
        self.entries.insert(source.into(), localized.into());
    }

    /// 查找译文，不存在时返回原文
    pub fn translate<'a>(&'a self, source: &'a str) -> &'a str {
        self.entries
            .get(source)
            .map(String::as_str)
            .unwrap_or(source)
    }

    /// 是否包含该键
    pub fn contains(&self, source: &str) -> bool {
        self.entries.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

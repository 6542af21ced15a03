//! # Error 模块
//!
//! 定义 vn-ui 中使用的错误类型。
//!
//! 翻译查找、样式推导、按钮渲染、按键分发等操作是全函数，不返回错误；
//! 这里只覆盖 UI 构建器的误用、布局参数校验以及文件加载。

use thiserror::Error;

/// UI 构建错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    /// 栈已空，没有可关闭的控件或图层
    #[error("close() 试图关闭最后一个打开的图层或控件")]
    CloseOnEmptyStack,

    /// 单子控件容器还在等待它的子控件
    #[error("容器 '{container}' 仍在等待子控件，不能关闭")]
    AwaitingChild { container: String },

    /// 未知图层
    #[error("'{name}' 不是已知图层")]
    UnknownLayer { name: String },

    /// 有控件打开时切换图层
    #[error("控件打开时不允许切换图层")]
    LayerWhileWidgetOpen,

    /// 交互前栈未清空
    #[error("交互时控件/图层栈非空（深度 {depth}），是否遗漏了 close()？")]
    UnclosedStack { depth: usize },

    /// 未知的布局参数
    #[error("未知的布局参数 '{key}'")]
    UnknownLayoutHint { key: String },

    /// 布局参数值无效
    #[error("布局参数 '{key}' 的值无效 - {message}")]
    InvalidLayoutHint { key: String, message: String },

    /// 布局参数 JSON 解析失败
    #[error("布局参数解析失败: {0}")]
    LayoutHintParse(String),

    /// 网格子控件数量与行列数不符
    #[error("网格未填满：需要 {expected} 个子控件，实际 {found} 个")]
    GridNotFull { expected: usize, found: usize },
}

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 序列化失败
    #[error("配置序列化失败: {0}")]
    SerializationFailed(String),

    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    Io(String),

    /// 验证失败
    #[error("配置验证失败: {0}")]
    ValidationFailed(String),
}

/// 翻译表加载错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslationError {
    /// 读取文件失败
    #[error("读取翻译文件 '{path}' 失败: {message}")]
    Io { path: String, message: String },

    /// JSON 解析失败
    #[error("翻译文件解析失败: {0}")]
    Parse(String),
}

/// vn-ui 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VnUiError {
    /// UI 构建错误
    #[error("UI 错误: {0}")]
    Ui(#[from] UiError),

    /// 配置错误
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// 翻译错误
    #[error("{0}")]
    Translation(#[from] TranslationError),
}

/// Result 类型别名
pub type VnUiResult<T> = Result<T, VnUiError>;

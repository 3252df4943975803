//! 大盘数据模型
//!
//! 指数行情、板块表现和财经日历事件

use serde::{Deserialize, Serialize};

/// 指数行情
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuote {
    /// 指数代码（A股指数展示规范形式，如 SH000001）
    pub symbol: String,
    /// 指数名称
    pub name: String,
    /// 最新点位
    pub price: f64,
    /// 涨跌额
    pub change: f64,
    /// 涨跌幅（百分比）
    pub change_percent: f64,
    /// 昨收
    pub prev_close: f64,
    /// 今开
    pub open: Option<f64>,
    /// 最高
    pub high: Option<f64>,
    /// 最低
    pub low: Option<f64>,
    /// 成交量
    pub volume: Option<f64>,
    /// 成交额（上游不提供，固定为 0）
    pub amount: f64,
}

/// 板块表现行
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorPerformance {
    /// 展示名称（cn 区域为中文译名）
    pub name: String,
    /// 筛选键（固定英文板块名，供 /screener 使用）
    pub filter_key: String,
    /// 涨跌幅字符串（带符号和百分号，如 "+1.23%"）
    pub change: String,
    /// 是否上涨
    pub is_up: bool,
    /// 前端着色类名
    pub color: String,
}

/// 财经日历事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicEvent {
    /// 公布时间（HH:MM）
    pub time: String,
    /// 国家/地区
    pub country: String,
    /// 事件名称
    pub event: String,
    /// 实际值
    pub actual: String,
    /// 预测值
    pub forecast: String,
    /// 影响程度
    pub impact: String,
}

/// /markets 查询参数
#[derive(Debug, Deserialize)]
pub struct MarketsQuery {
    /// 区域（us/cn，默认 us）
    pub region: Option<String>,
}

/// /sectors 查询参数
#[derive(Debug, Deserialize)]
pub struct SectorsQuery {
    /// 区域（us/cn，默认 us）
    pub region: Option<String>,
}

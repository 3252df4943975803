//! 股票数据模型
//!
//! 历史K线、实时快照和个股档案的数据结构。
//! 对外 JSON 字段统一使用 camelCase，与前端既有契约保持一致。

use serde::{Deserialize, Serialize};

/// 历史K线（单根 OHLCV）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryBar {
    /// 日期（YYYY-MM-DD）
    pub date: String,
    /// 开盘价
    pub open: f64,
    /// 最高价
    pub high: f64,
    /// 最低价
    pub low: f64,
    /// 收盘价
    pub close: f64,
    /// 成交量
    pub volume: u64,
}

/// A股实时快照行
///
/// 对应东方财富全市场行情列表的单行数据。
/// 停牌或无数据的字段上游返回 "-"，解析为 None。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRow {
    /// 规范代码（SH/SZ + 6位数字）
    pub symbol: String,
    /// 股票名称
    pub name: String,
    /// 最新价
    pub price: Option<f64>,
    /// 涨跌幅（百分比）
    pub change_percent: Option<f64>,
    /// 涨跌额
    pub change: Option<f64>,
    /// 成交量（手）
    pub volume: Option<f64>,
    /// 成交额
    pub amount: Option<f64>,
    /// 振幅
    pub amplitude: Option<f64>,
    /// 换手率
    pub turnover_rate: Option<f64>,
    /// 市盈率（动态）
    pub pe_ratio: Option<f64>,
    /// 量比
    pub volume_ratio: Option<f64>,
    /// 5分钟涨跌
    pub five_min_change: Option<f64>,
    /// 最高价
    pub high: Option<f64>,
    /// 最低价
    pub low: Option<f64>,
    /// 今开
    pub open: Option<f64>,
    /// 昨收
    pub prev_close: Option<f64>,
    /// 总市值
    pub total_market_cap: Option<f64>,
    /// 流通市值
    pub float_market_cap: Option<f64>,
    /// 涨速
    pub rise_speed: Option<f64>,
    /// 市净率
    pub pb_ratio: Option<f64>,
    /// 60日涨跌幅
    pub sixty_day_change: Option<f64>,
    /// 年初至今涨跌幅
    pub ytd_change: Option<f64>,
}

/// 个股档案
///
/// /info 和 /screener 返回的描述性记录，字段集合以全球数据源为准，
/// A股数据源填不出的字段置 "N/A" 或 None。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockProfile {
    /// 规范代码
    pub symbol: String,
    /// 名称（A股可能被名称映射表覆盖为本地化名称）
    pub name: String,
    /// 交易所
    pub exchange: String,
    /// 计价货币
    pub currency: String,
    /// 国家/地区
    pub country: String,
    /// 板块
    pub sector: String,
    /// 行业
    pub industry: String,
    /// 总市值
    pub market_cap: Option<f64>,
    /// 公司简介
    pub description: String,
    /// 官网
    pub website: String,
    /// CEO（上游不提供，保留占位）
    pub ceo: String,
    /// 员工数
    pub employees: Option<u64>,
    /// 成立年份（上游不提供，保留占位）
    pub founded: Option<i64>,
    /// 上市日期（上游原始表示，Unix 时间戳或 yyyyMMdd）
    pub ipo_date: Option<i64>,
    /// 最新价
    pub price: Option<f64>,
    /// 涨跌额
    pub change: Option<f64>,
    /// 涨跌幅（百分比）
    pub change_percent: Option<f64>,
    /// 市盈率（TTM）
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    /// 预期市盈率
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<f64>,
    /// 市净率
    pub price_to_book: Option<f64>,
    /// 股息率
    pub dividend_yield: Option<f64>,
    /// 贝塔系数
    pub beta: Option<f64>,
    /// 52周最高
    pub fifty_two_week_high: Option<f64>,
    /// 52周最低
    pub fifty_two_week_low: Option<f64>,
    /// 平均成交量
    pub average_volume: Option<f64>,
    /// 每股收益（TTM）
    pub trailing_eps: Option<f64>,
    /// 预期每股收益
    pub forward_eps: Option<f64>,
}

/// /history 查询参数
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// 原始股票代码（必填）
    pub symbol: String,
    /// 周期：A股 daily/weekly/monthly，全球市场 1d/5d/1mo/.../5y/max
    pub period: Option<String>,
    /// K线粒度：1d/1w/1m/1y
    pub interval: Option<String>,
}

/// /screener 查询参数
#[derive(Debug, Deserialize)]
pub struct ScreenerQuery {
    /// 板块名称（如 Technology、Semiconductors）
    pub sector: Option<String>,
    /// 区域（us/cn，默认 us）
    pub region: Option<String>,
}

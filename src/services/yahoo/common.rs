//! Yahoo Finance 接口常量与辅助函数

/// 历史K线 API（v8 chart）
pub const YF_CHART_API: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
/// 批量实时报价 API（v7 quote）
pub const YF_QUOTE_API: &str = "https://query1.finance.yahoo.com/v7/finance/quote";
/// 个股档案 API（v10 quoteSummary）
pub const YF_QUOTE_SUMMARY_API: &str =
    "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
/// 搜索/新闻 API（v1 search）
pub const YF_SEARCH_API: &str = "https://query1.finance.yahoo.com/v1/finance/search";
/// 筛选器 API（v1 screener）
pub const YF_SCREENER_API: &str = "https://query1.finance.yahoo.com/v1/finance/screener";

/// 浏览器 User-Agent，Yahoo 对默认 UA 返回 429
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 提取 quoteSummary 风格的数值字段
///
/// quoteSummary 的数值包装为 {"raw": 1.23, "fmt": "1.23"}，
/// 部分字段（v7 quote、screener）则是裸数值，两种形式都兼容
pub fn raw_f64(value: &serde_json::Value) -> Option<f64> {
    value["raw"].as_f64().or_else(|| value.as_f64())
}

//! 东方财富接口常量

/// 全市场实时行情列表 API
pub const EM_SPOT_API: &str = "https://82.push2.eastmoney.com/api/qt/clist/get";
/// 个股K线 API
pub const EM_KLINE_API: &str = "https://push2his.eastmoney.com/api/qt/stock/kline/get";
/// 个股概要 API
pub const EM_STOCK_GET_API: &str = "https://push2.eastmoney.com/api/qt/stock/get";
/// 个股新闻搜索 API
pub const EM_NEWS_SEARCH_API: &str = "https://search-api-web.eastmoney.com/search/jsonp";
/// 7×24 财经快讯 API
pub const EM_TELEGRAPH_API: &str = "https://np-listapi.eastmoney.com/comm/web/getNewsByColumns";

/// 行情接口公共 ut 参数
pub const EM_UT_TOKEN: &str = "fa5fd1943c7b386f172d6893dbfba10b";

/// 浏览器 User-Agent，行情接口对默认 UA 会限流
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

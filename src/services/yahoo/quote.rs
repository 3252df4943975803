//! 实时报价与个股档案
//!
//! v7 quote 接口一次取回多只代码的实时报价（/markets 和 /sectors 共用），
//! v10 quoteSummary 接口取个股的完整描述性记录

use anyhow::{anyhow, Result};
use reqwest::Client;

use super::common::{raw_f64, USER_AGENT, YF_QUOTE_API, YF_QUOTE_SUMMARY_API};
use crate::models::{IndexQuote, StockProfile};

/// 批量获取实时报价，返回原始报价对象
///
/// symbols 为逗号分隔的代码串；上游会静默丢掉无效代码，
/// 调用方按 symbol 字段回查各自的行
pub async fn get_quotes(symbols: &str) -> Result<Vec<serde_json::Value>> {
    let client = Client::new();

    let response = client
        .get(YF_QUOTE_API)
        .query(&[("symbols", symbols)])
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("获取报价失败: {}", response.status()));
    }

    let json_data: serde_json::Value = response.json().await?;

    json_data["quoteResponse"]["result"]
        .as_array()
        .cloned()
        .ok_or_else(|| anyhow!("报价响应缺少 quoteResponse.result 字段"))
}

/// 由原始报价对象构造指数行情
///
/// 最新价或昨收缺失的条目视为无效，返回 None 由调用方丢弃
pub fn parse_index_quote(
    item: &serde_json::Value,
    display_symbol: &str,
    display_name: &str,
) -> Option<IndexQuote> {
    let price = raw_f64(&item["regularMarketPrice"])?;
    let prev_close = raw_f64(&item["regularMarketPreviousClose"])?;

    let change = price - prev_close;
    let change_percent = if prev_close != 0.0 {
        (change / prev_close) * 100.0
    } else {
        0.0
    };

    Some(IndexQuote {
        symbol: display_symbol.to_string(),
        name: display_name.to_string(),
        price,
        change,
        change_percent,
        prev_close,
        open: raw_f64(&item["regularMarketOpen"]),
        high: raw_f64(&item["regularMarketDayHigh"]),
        low: raw_f64(&item["regularMarketDayLow"]),
        volume: raw_f64(&item["regularMarketVolume"]),
        amount: 0.0,
    })
}

/// 获取个股完整档案
pub async fn get_stock_info(yahoo_symbol: &str, display_symbol: &str) -> Result<StockProfile> {
    let url = format!("{}/{}", YF_QUOTE_SUMMARY_API, yahoo_symbol);
    let client = Client::new();

    let response = client
        .get(&url)
        .query(&[(
            "modules",
            "assetProfile,summaryDetail,price,defaultKeyStatistics,financialData",
        )])
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("获取个股信息失败: {}", response.status()));
    }

    let json_data: serde_json::Value = response.json().await?;

    let result = &json_data["quoteSummary"]["result"][0];
    if result.is_null() {
        return Err(anyhow!("未找到股票 {} 的信息", yahoo_symbol));
    }

    Ok(parse_profile(display_symbol, result))
}

/// 解析 quoteSummary 响应为个股档案
fn parse_profile(display_symbol: &str, result: &serde_json::Value) -> StockProfile {
    let asset = &result["assetProfile"];
    let price_mod = &result["price"];
    let summary = &result["summaryDetail"];
    let stats = &result["defaultKeyStatistics"];
    let financial = &result["financialData"];

    let name = price_mod["longName"]
        .as_str()
        .or_else(|| price_mod["shortName"].as_str())
        .unwrap_or("N/A")
        .to_string();

    StockProfile {
        symbol: display_symbol.to_string(),
        name,
        exchange: price_mod["exchangeName"].as_str().unwrap_or("N/A").to_string(),
        currency: price_mod["currency"].as_str().unwrap_or("N/A").to_string(),
        country: asset["country"].as_str().unwrap_or("N/A").to_string(),
        sector: asset["sector"].as_str().unwrap_or("N/A").to_string(),
        industry: asset["industry"].as_str().unwrap_or("N/A").to_string(),
        market_cap: raw_f64(&price_mod["marketCap"]),
        description: asset["longBusinessSummary"].as_str().unwrap_or("N/A").to_string(),
        website: asset["website"].as_str().unwrap_or("N/A").to_string(),
        ceo: "N/A".to_string(),
        employees: asset["fullTimeEmployees"].as_u64(),
        founded: None,
        ipo_date: stats["firstTradeDateEpochUtc"]["raw"]
            .as_i64()
            .or_else(|| stats["firstTradeDateEpochUtc"].as_i64()),
        price: raw_f64(&financial["currentPrice"])
            .or_else(|| raw_f64(&price_mod["regularMarketPrice"])),
        change: raw_f64(&price_mod["regularMarketChange"]),
        // price 模块的涨跌幅 raw 值是小数，对外统一为百分比
        change_percent: raw_f64(&price_mod["regularMarketChangePercent"]).map(|v| v * 100.0),
        trailing_pe: raw_f64(&summary["trailingPE"]),
        forward_pe: raw_f64(&summary["forwardPE"]),
        price_to_book: raw_f64(&stats["priceToBook"]),
        dividend_yield: raw_f64(&summary["dividendYield"]),
        beta: raw_f64(&summary["beta"]),
        fifty_two_week_high: raw_f64(&summary["fiftyTwoWeekHigh"]),
        fifty_two_week_low: raw_f64(&summary["fiftyTwoWeekLow"]),
        average_volume: raw_f64(&summary["averageVolume"]),
        trailing_eps: raw_f64(&stats["trailingEps"]),
        forward_eps: raw_f64(&stats["forwardEps"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_quote() {
        let mock = serde_json::json!({
            "symbol": "^GSPC",
            "regularMarketPrice": 5200.5,
            "regularMarketPreviousClose": 5150.0,
            "regularMarketOpen": 5160.0,
            "regularMarketDayHigh": 5210.0,
            "regularMarketDayLow": 5140.0,
            "regularMarketVolume": 2500000000.0
        });

        let quote = parse_index_quote(&mock, "^GSPC", "S&P 500").unwrap();
        assert_eq!(quote.symbol, "^GSPC");
        assert_eq!(quote.name, "S&P 500");
        assert!((quote.change - 50.5).abs() < 1e-9);
        assert!((quote.change_percent - 0.980582).abs() < 1e-4);
        assert_eq!(quote.amount, 0.0);
    }

    /// 最新价缺失的条目整行丢弃
    #[test]
    fn test_parse_index_quote_missing_price() {
        let mock = serde_json::json!({
            "symbol": "^GSPC",
            "regularMarketPreviousClose": 5150.0
        });
        assert!(parse_index_quote(&mock, "^GSPC", "S&P 500").is_none());
    }

    #[test]
    fn test_parse_profile() {
        let mock = serde_json::json!({
            "assetProfile": {
                "country": "United States",
                "sector": "Technology",
                "industry": "Consumer Electronics",
                "longBusinessSummary": "Apple Inc. designs smartphones.",
                "website": "https://www.apple.com",
                "fullTimeEmployees": 161000
            },
            "price": {
                "longName": "Apple Inc.",
                "shortName": "Apple",
                "exchangeName": "NasdaqGS",
                "currency": "USD",
                "marketCap": {"raw": 2900000000000.0},
                "regularMarketPrice": {"raw": 187.5},
                "regularMarketChange": {"raw": 1.5},
                "regularMarketChangePercent": {"raw": 0.00806}
            },
            "summaryDetail": {
                "trailingPE": {"raw": 30.5},
                "forwardPE": {"raw": 27.1},
                "dividendYield": {"raw": 0.0055},
                "beta": {"raw": 1.28},
                "fiftyTwoWeekHigh": {"raw": 199.6},
                "fiftyTwoWeekLow": {"raw": 164.1},
                "averageVolume": {"raw": 58000000}
            },
            "defaultKeyStatistics": {
                "priceToBook": {"raw": 46.8},
                "trailingEps": {"raw": 6.14},
                "forwardEps": {"raw": 6.92}
            },
            "financialData": {
                "currentPrice": {"raw": 187.6}
            }
        });

        let profile = parse_profile("AAPL", &mock);
        assert_eq!(profile.symbol, "AAPL");
        assert_eq!(profile.name, "Apple Inc.");
        assert_eq!(profile.exchange, "NasdaqGS");
        assert_eq!(profile.sector, "Technology");
        // financialData 的 currentPrice 优先于 price 模块
        assert_eq!(profile.price, Some(187.6));
        // 涨跌幅小数转为百分比
        assert!((profile.change_percent.unwrap() - 0.806).abs() < 1e-9);
        assert_eq!(profile.trailing_pe, Some(30.5));
        assert_eq!(profile.employees, Some(161000));
        assert_eq!(profile.ceo, "N/A");
    }

    /// 联网冒烟测试，接口不可用时仅打印
    #[tokio::test]
    async fn test_fetch_quotes() {
        println!("\n========== 测试批量获取报价 ==========");
        match get_quotes("^GSPC,^DJI,^IXIC").await {
            Ok(quotes) => {
                println!("✅ 获取成功！共 {} 条", quotes.len());
                for quote in &quotes {
                    println!(
                        "  {} - {:?}",
                        quote["symbol"].as_str().unwrap_or("?"),
                        quote["regularMarketPrice"].as_f64()
                    );
                }
            }
            Err(e) => {
                println!("❌ 获取失败: {}", e);
            }
        }
    }
}

//! 股票筛选器
//!
//! 走 Yahoo v1 screener 接口，按地区和板块过滤，按市值降序取前 100

use anyhow::{anyhow, Result};
use reqwest::Client;

use super::common::{raw_f64, USER_AGENT, YF_SCREENER_API};
use crate::models::StockProfile;
use crate::services::symbol;

/// 按板块筛选股票
///
/// sector 为英文板块名（Title Case），为空时只按地区筛选
pub async fn screen(sector: &str, region: &str) -> Result<Vec<StockProfile>> {
    let body = build_query(sector, region);

    let client = Client::new();
    let response = client
        .post(YF_SCREENER_API)
        .query(&[("count", "100")])
        .header("User-Agent", USER_AGENT)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("筛选请求失败: {}", response.status()));
    }

    let json_data: serde_json::Value = response.json().await?;
    parse_screener(&json_data, sector)
}

/// 组装筛选查询体
///
/// sector 为空时只有地区一个过滤条件；Semiconductors 在 Yahoo
/// 分类中属于 industry 维度，其余按 sector 维度过滤
fn build_query(sector: &str, region: &str) -> serde_json::Value {
    let mut operands =
        vec![serde_json::json!({"operator": "eq", "operands": ["region", region]})];

    if !sector.is_empty() {
        let field = if sector == "Semiconductors" {
            "industry"
        } else {
            "sector"
        };
        operands.push(serde_json::json!({"operator": "eq", "operands": [field, sector]}));
    }

    serde_json::json!({
        "size": 100,
        "offset": 0,
        "sortField": "intradaymarketcap",
        "sortType": "DESC",
        "quoteType": "EQUITY",
        "query": {
            "operator": "and",
            "operands": operands
        }
    })
}

/// 解析 screener 响应为个股档案列表
fn parse_screener(
    json_data: &serde_json::Value,
    requested_sector: &str,
) -> Result<Vec<StockProfile>> {
    let quotes = json_data["finance"]["result"][0]["quotes"]
        .as_array()
        .ok_or_else(|| anyhow!("筛选响应缺少 finance.result[0].quotes 字段"))?;

    Ok(quotes
        .iter()
        .filter_map(|item| parse_screener_row(item, requested_sector))
        .collect())
}

/// 单行报价转档案，代码统一为内部规范形式
///
/// screener 行通常不带 sector 字段，缺失时回填本次请求的板块
fn parse_screener_row(item: &serde_json::Value, requested_sector: &str) -> Option<StockProfile> {
    let raw_symbol = item["symbol"].as_str()?;
    let (_, canonical) = symbol::classify(raw_symbol);

    let sector = match item["sector"].as_str() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ if !requested_sector.is_empty() => requested_sector.to_string(),
        _ => "N/A".to_string(),
    };

    Some(StockProfile {
        symbol: canonical,
        name: item["longName"]
            .as_str()
            .or_else(|| item["shortName"].as_str())
            .unwrap_or("N/A")
            .to_string(),
        exchange: item["fullExchangeName"].as_str().unwrap_or("N/A").to_string(),
        currency: item["currency"].as_str().unwrap_or("N/A").to_string(),
        country: "N/A".to_string(),
        sector,
        industry: item["industry"].as_str().unwrap_or("N/A").to_string(),
        market_cap: raw_f64(&item["marketCap"]),
        description: "N/A".to_string(),
        website: "N/A".to_string(),
        ceo: "N/A".to_string(),
        employees: None,
        founded: None,
        // 首个交易日以毫秒时间戳给出
        ipo_date: item["firstTradeDateMilliseconds"].as_i64().map(|ms| ms / 1000),
        price: raw_f64(&item["regularMarketPrice"]),
        change: raw_f64(&item["regularMarketChange"]),
        change_percent: raw_f64(&item["regularMarketChangePercent"]),
        trailing_pe: raw_f64(&item["trailingPE"]),
        forward_pe: raw_f64(&item["forwardPE"]),
        price_to_book: raw_f64(&item["priceToBook"]),
        dividend_yield: raw_f64(&item["dividendYield"]),
        beta: raw_f64(&item["beta"]),
        fifty_two_week_high: raw_f64(&item["fiftyTwoWeekHigh"]),
        fifty_two_week_low: raw_f64(&item["fiftyTwoWeekLow"]),
        average_volume: raw_f64(&item["averageDailyVolume3Month"]),
        trailing_eps: raw_f64(&item["epsTrailingTwelveMonths"]),
        forward_eps: raw_f64(&item["epsForward"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query() {
        let body = build_query("Technology", "us");
        let operands = body["query"]["operands"].as_array().unwrap();
        assert_eq!(operands.len(), 2);
        assert_eq!(operands[0]["operands"][0], "region");
        assert_eq!(operands[1]["operands"][0], "sector");
        assert_eq!(operands[1]["operands"][1], "Technology");

        // Semiconductors 按 industry 维度过滤
        let body = build_query("Semiconductors", "us");
        let operands = body["query"]["operands"].as_array().unwrap();
        assert_eq!(operands[1]["operands"][0], "industry");
    }

    /// 板块为空时只按地区筛选，不得拒绝请求
    #[test]
    fn test_build_query_region_only() {
        let body = build_query("", "us");
        let operands = body["query"]["operands"].as_array().unwrap();
        assert_eq!(operands.len(), 1);
        assert_eq!(operands[0]["operands"][0], "region");
        assert_eq!(operands[0]["operands"][1], "us");
    }

    #[test]
    fn test_parse_screener() {
        let mock = serde_json::json!({
            "finance": {
                "result": [{
                    "quotes": [
                        {
                            "symbol": "NVDA",
                            "longName": "NVIDIA Corporation",
                            "fullExchangeName": "NasdaqGS",
                            "currency": "USD",
                            "marketCap": 2200000000000.0,
                            "regularMarketPrice": 880.5,
                            "regularMarketChange": 12.3,
                            "regularMarketChangePercent": 1.42,
                            "trailingPE": 72.5,
                            "forwardPE": 35.1,
                            "averageDailyVolume3Month": 48000000,
                            "epsTrailingTwelveMonths": 12.1,
                            "firstTradeDateMilliseconds": 917015400000i64
                        },
                        {"noSymbol": true}
                    ]
                }]
            }
        });

        let profiles = parse_screener(&mock, "Technology").unwrap();
        // 没有 symbol 的行被丢弃
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].symbol, "NVDA");
        assert_eq!(profiles[0].name, "NVIDIA Corporation");
        assert_eq!(profiles[0].price, Some(880.5));
        assert_eq!(profiles[0].change_percent, Some(1.42));
        assert_eq!(profiles[0].ipo_date, Some(917015400));
        // 行内无 sector 字段时回填请求的板块
        assert_eq!(profiles[0].sector, "Technology");
    }

    #[test]
    fn test_parse_screener_sector_backfill() {
        let mock = serde_json::json!({
            "finance": {
                "result": [{
                    "quotes": [
                        {"symbol": "XOM", "sector": "Energy", "regularMarketPrice": 110.0},
                        {"symbol": "CVX", "regularMarketPrice": 150.0}
                    ]
                }]
            }
        });

        let profiles = parse_screener(&mock, "Energy").unwrap();
        // 行内自带的 sector 优先
        assert_eq!(profiles[0].sector, "Energy");
        assert_eq!(profiles[1].sector, "Energy");

        // 请求本身没有板块时保持占位值
        let profiles = parse_screener(&mock, "").unwrap();
        assert_eq!(profiles[1].sector, "N/A");
    }

    #[test]
    fn test_parse_screener_cn_symbol_canonicalized() {
        let mock = serde_json::json!({
            "finance": {
                "result": [{
                    "quotes": [
                        {"symbol": "600519.SS", "shortName": "Kweichow Moutai", "regularMarketPrice": 1700.0}
                    ]
                }]
            }
        });

        let profiles = parse_screener(&mock, "Consumer Defensive").unwrap();
        assert_eq!(profiles[0].symbol, "SH600519");
    }

    #[test]
    fn test_parse_screener_missing_quotes() {
        let mock = serde_json::json!({"finance": {"error": "bad request"}});
        assert!(parse_screener(&mock, "Technology").is_err());
    }

    /// 联网冒烟测试，接口不可用时仅打印
    #[tokio::test]
    async fn test_fetch_screener() {
        println!("\n========== 测试板块筛选 ==========");
        match screen("Technology", "us").await {
            Ok(profiles) => {
                println!("✅ 筛选成功！共 {} 只股票", profiles.len());
                for profile in profiles.iter().take(5) {
                    println!("  {} {} - {:?}", profile.symbol, profile.name, profile.price);
                }
            }
            Err(e) => {
                println!("❌ 筛选失败: {}", e);
            }
        }
    }
}

//! 全球市场历史K线
//!
//! 走 Yahoo v8 chart 接口，时间戳按 UTC 渲染为 YYYY-MM-DD

use anyhow::{anyhow, Result};
use reqwest::Client;

use super::common::{USER_AGENT, YF_CHART_API};
use crate::models::HistoryBar;

/// K线粒度别名映射，沿用原有服务端约定
fn map_interval(interval: &str) -> &str {
    match interval {
        "1w" => "1wk",
        "1m" => "1mo",
        "1y" => "3mo",
        other => other,
    }
}

/// 获取历史K线
///
/// period 取 Yahoo 的 range 值：1d,5d,1mo,3mo,6mo,1y,2y,5y,10y,ytd,max
pub async fn get_history(symbol: &str, period: &str, interval: &str) -> Result<Vec<HistoryBar>> {
    let url = format!("{}/{}", YF_CHART_API, symbol);
    let client = Client::new();

    let response = client
        .get(&url)
        .query(&[("range", period), ("interval", map_interval(interval))])
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("获取历史数据失败: {}", response.status()));
    }

    let json_data: serde_json::Value = response.json().await?;
    parse_chart(&json_data)
}

/// 解析 chart 响应
fn parse_chart(json_data: &serde_json::Value) -> Result<Vec<HistoryBar>> {
    if !json_data["chart"]["error"].is_null() {
        let description = json_data["chart"]["error"]["description"]
            .as_str()
            .unwrap_or("unknown");
        return Err(anyhow!("Yahoo 返回错误: {}", description));
    }

    let result = &json_data["chart"]["result"][0];
    let timestamps = result["timestamp"]
        .as_array()
        .ok_or_else(|| anyhow!("行情响应缺少 timestamp 字段"))?;

    let quote = &result["indicators"]["quote"][0];
    let opens = quote["open"].as_array();
    let highs = quote["high"].as_array();
    let lows = quote["low"].as_array();
    let closes = quote["close"].as_array();
    let volumes = quote["volume"].as_array();

    let field_at = |arr: Option<&Vec<serde_json::Value>>, i: usize| -> Option<f64> {
        arr.and_then(|a| a.get(i)).and_then(|v| v.as_f64())
    };

    let mut bars = Vec::with_capacity(timestamps.len());

    for (i, ts) in timestamps.iter().enumerate() {
        let Some(ts) = ts.as_i64() else { continue };
        // 停牌/缺数据的时间点 OHLC 为 null，整行跳过
        let (Some(open), Some(high), Some(low), Some(close)) = (
            field_at(opens, i),
            field_at(highs, i),
            field_at(lows, i),
            field_at(closes, i),
        ) else {
            continue;
        };

        let date = chrono::DateTime::from_timestamp(ts, 0)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        bars.push(HistoryBar {
            date,
            open,
            high,
            low,
            close,
            volume: field_at(volumes, i).map(|v| v as u64).unwrap_or(0),
        });
    }

    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_interval() {
        assert_eq!(map_interval("1d"), "1d");
        assert_eq!(map_interval("1w"), "1wk");
        assert_eq!(map_interval("1m"), "1mo");
        assert_eq!(map_interval("1y"), "3mo");
        assert_eq!(map_interval("5d"), "5d");
    }

    #[test]
    fn test_parse_chart() {
        let mock = serde_json::json!({
            "chart": {
                "error": null,
                "result": [{
                    "timestamp": [1704204000, 1704290400, 1704376800],
                    "indicators": {
                        "quote": [{
                            "open":   [185.1, null, 186.0],
                            "high":   [186.7, null, 187.2],
                            "low":    [184.3, null, 185.5],
                            "close":  [185.6, null, 186.9],
                            "volume": [52000000, null, 48000000]
                        }]
                    }
                }]
            }
        });

        let bars = parse_chart(&mock).unwrap();
        // 第二行整行为 null，应被跳过
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, "2024-01-02");
        assert_eq!(bars[0].open, 185.1);
        assert_eq!(bars[0].volume, 52000000);
        assert_eq!(bars[1].close, 186.9);
    }

    #[test]
    fn test_parse_chart_error() {
        let mock = serde_json::json!({
            "chart": {
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"},
                "result": null
            }
        });

        let err = parse_chart(&mock).unwrap_err();
        assert!(err.to_string().contains("No data found"));
    }

    /// 联网冒烟测试，接口不可用时仅打印
    #[tokio::test]
    async fn test_fetch_history() {
        println!("\n========== 测试获取美股日K线 ==========");
        match get_history("AAPL", "1mo", "1d").await {
            Ok(bars) => {
                println!("✅ 获取成功！共 {} 根K线", bars.len());
                for bar in bars.iter().rev().take(3) {
                    println!(
                        "  {} O:{:.2} H:{:.2} L:{:.2} C:{:.2}",
                        bar.date, bar.open, bar.high, bar.low, bar.close
                    );
                }
            }
            Err(e) => {
                println!("❌ 获取失败: {}", e);
            }
        }
    }
}

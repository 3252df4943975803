//! A股历史K线
//!
//! 对应 akshare 的 stock_zh_a_hist()，前复权日/周/月K线

use anyhow::{anyhow, Result};
use reqwest::Client;

use super::common::{EM_KLINE_API, USER_AGENT};
use crate::models::HistoryBar;
use crate::services::symbol;

/// 周期到东方财富 klt 参数的映射
///
/// 兼容 akshare 风格（daily/weekly/monthly）和统一接口风格（1d/1w/1m）
fn map_klt(period: &str) -> Result<&'static str> {
    match period {
        "daily" | "1d" => Ok("101"),
        "weekly" | "1w" => Ok("102"),
        "monthly" | "1m" => Ok("103"),
        other => Err(anyhow!("不支持的A股K线周期: {}", other)),
    }
}

/// 获取个股历史K线（前复权）
pub async fn get_history(canonical: &str, period: &str) -> Result<Vec<HistoryBar>> {
    let secid = symbol::em_secid(canonical);
    let klt = map_klt(period)?;
    let client = Client::new();

    let response = client
        .get(EM_KLINE_API)
        .query(&[
            ("secid", secid.as_str()),
            ("klt", klt),
            ("fqt", "1"),
            ("beg", "0"),
            ("end", "20500101"),
            ("fields1", "f1,f2,f3,f4,f5,f6"),
            ("fields2", "f51,f52,f53,f54,f55,f56,f57,f58,f59,f60,f61"),
        ])
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("获取历史数据失败: {}", response.status()));
    }

    let json_data: serde_json::Value = response.json().await?;

    let klines = json_data["data"]["klines"]
        .as_array()
        .ok_or_else(|| anyhow!("K线响应缺少 data.klines 字段，代码 {} 可能无效", canonical))?;

    // 个别异常行跳过，不影响整体序列
    Ok(klines
        .iter()
        .filter_map(|v| v.as_str())
        .filter_map(|line| parse_kline(line).ok())
        .collect())
}

/// 解析K线字符串
///
/// 东方财富字段顺序：日期,开盘,收盘,最高,最低,成交量,成交额,...
fn parse_kline(line: &str) -> Result<HistoryBar> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 6 {
        return Err(anyhow!("K线字段不足: {}", line));
    }

    Ok(HistoryBar {
        date: fields[0].to_string(),
        open: fields[1].parse().unwrap_or(0.0),
        close: fields[2].parse().unwrap_or(0.0),
        high: fields[3].parse().unwrap_or(0.0),
        low: fields[4].parse().unwrap_or(0.0),
        volume: fields[5].parse().unwrap_or(0),
    })
}

//! 个股概要信息
//!
//! 对应 akshare 的 stock_individual_info_em()，
//! 填充统一的个股档案结构，A股数据源没有的字段置 "N/A" 或 None

use anyhow::{anyhow, Result};
use reqwest::Client;

use super::common::{EM_STOCK_GET_API, EM_UT_TOKEN, USER_AGENT};
use crate::models::StockProfile;
use crate::services::symbol;

/// 获取个股概要
pub async fn get_stock_info(canonical: &str) -> Result<StockProfile> {
    let secid = symbol::em_secid(canonical);
    let client = Client::new();

    let response = client
        .get(EM_STOCK_GET_API)
        .query(&[
            ("ut", EM_UT_TOKEN),
            ("fltt", "2"),
            ("invt", "2"),
            (
                "fields",
                "f43,f57,f58,f116,f127,f162,f167,f169,f170,f189",
            ),
            ("secid", secid.as_str()),
        ])
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("获取个股信息失败: {}", response.status()));
    }

    let json_data: serde_json::Value = response.json().await?;

    let data = &json_data["data"];
    if data.is_null() {
        return Err(anyhow!("未找到股票 {} 的信息", canonical));
    }

    Ok(parse_stock_info(canonical, data))
}

/// 解析个股概要
///
/// 字段编号：f58 名称、f43 最新价、f169 涨跌额、f170 涨跌幅、
/// f116 总市值、f162 市盈率（动态）、f167 市净率、f127 所属行业、
/// f189 上市日期（yyyyMMdd 数字）
fn parse_stock_info(canonical: &str, data: &serde_json::Value) -> StockProfile {
    let exchange = if canonical.starts_with("SH") { "SSE" } else { "SZSE" };
    let industry = data["f127"].as_str().unwrap_or("N/A").to_string();

    StockProfile {
        symbol: canonical.to_string(),
        name: data["f58"].as_str().unwrap_or("N/A").to_string(),
        exchange: exchange.to_string(),
        currency: "CNY".to_string(),
        country: "China".to_string(),
        sector: industry.clone(),
        industry,
        market_cap: data["f116"].as_f64(),
        description: "N/A".to_string(),
        website: "N/A".to_string(),
        ceo: "N/A".to_string(),
        employees: None,
        founded: None,
        ipo_date: data["f189"].as_i64(),
        price: data["f43"].as_f64(),
        change: data["f169"].as_f64(),
        change_percent: data["f170"].as_f64(),
        trailing_pe: data["f162"].as_f64(),
        forward_pe: None,
        price_to_book: data["f167"].as_f64(),
        dividend_yield: None,
        beta: None,
        fifty_two_week_high: None,
        fifty_two_week_low: None,
        average_volume: None,
        trailing_eps: None,
        forward_eps: None,
    }
}

//! A股全市场实时快照
//!
//! 对应 akshare 的 stock_zh_a_spot_em()，数据来自东方财富行情中心。
//! 一次请求返回沪深京全部A股的实时行情。

use anyhow::{anyhow, Result};
use reqwest::Client;

use super::common::{EM_SPOT_API, USER_AGENT};
use crate::models::SnapshotRow;
use crate::services::symbol;

/// 获取沪深A股实时行情快照
pub async fn get_snapshot() -> Result<Vec<SnapshotRow>> {
    let client = Client::new();

    let response = client
        .get(EM_SPOT_API)
        .query(&[
            ("pn", "1"),
            ("pz", "50000"),
            ("po", "1"),
            ("np", "1"),
            ("fltt", "2"),
            ("invt", "2"),
            ("fid", "f3"),
            // 沪深主板 + 创业板 + 科创板
            ("fs", "m:0+t:6,m:0+t:80,m:1+t:2,m:1+t:23"),
            (
                "fields",
                "f2,f3,f4,f5,f6,f7,f8,f9,f10,f11,f12,f14,f15,f16,f17,f18,f20,f21,f22,f23,f24,f25",
            ),
        ])
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("获取快照数据失败: {}", response.status()));
    }

    let json_data: serde_json::Value = response.json().await?;

    let rows = json_data["data"]["diff"]
        .as_array()
        .ok_or_else(|| anyhow!("快照响应缺少 data.diff 字段"))?;

    Ok(rows.iter().map(parse_spot_item).collect())
}

/// 解析单行快照数据
///
/// 东方财富字段编号：f12 代码、f14 名称、f2 最新价、f3 涨跌幅、f4 涨跌额、
/// f5 成交量、f6 成交额、f7 振幅、f8 换手率、f9 市盈率、f10 量比、
/// f11 5分钟涨跌、f15-f18 高/低/开/昨收、f20/f21 总/流通市值、
/// f22 涨速、f23 市净率、f24 60日涨跌幅、f25 年初至今涨跌幅。
/// 停牌股票的数值字段为字符串 "-"，解析为 None。
fn parse_spot_item(item: &serde_json::Value) -> SnapshotRow {
    let code = item["f12"].as_str().unwrap_or("");
    let (_, canonical) = symbol::classify(code);

    SnapshotRow {
        symbol: canonical,
        name: item["f14"].as_str().unwrap_or("").to_string(),
        price: item["f2"].as_f64(),
        change_percent: item["f3"].as_f64(),
        change: item["f4"].as_f64(),
        volume: item["f5"].as_f64(),
        amount: item["f6"].as_f64(),
        amplitude: item["f7"].as_f64(),
        turnover_rate: item["f8"].as_f64(),
        pe_ratio: item["f9"].as_f64(),
        volume_ratio: item["f10"].as_f64(),
        five_min_change: item["f11"].as_f64(),
        high: item["f15"].as_f64(),
        low: item["f16"].as_f64(),
        open: item["f17"].as_f64(),
        prev_close: item["f18"].as_f64(),
        total_market_cap: item["f20"].as_f64(),
        float_market_cap: item["f21"].as_f64(),
        rise_speed: item["f22"].as_f64(),
        pb_ratio: item["f23"].as_f64(),
        sixty_day_change: item["f24"].as_f64(),
        ytd_change: item["f25"].as_f64(),
    }
}

//! 市场数据路由层
//!
//! 按地区把请求分发到东方财富（A股）或 Yahoo Finance（全球）数据源，
//! 并完成代码规范化、中文名覆盖等统一处理

use anyhow::Result;

use crate::models::{
    EconomicEvent, HistoryBar, IndexQuote, NewsItem, SectorPerformance, SnapshotRow, StockProfile,
};
use crate::services::eastmoney;
use crate::services::name_map;
use crate::services::symbol::{self, Region};
use crate::services::yahoo;

/// 获取历史K线，按代码形态自动选择数据源
///
/// A股的粒度取自 interval（非默认值时）或 period，
/// 美股的 period/interval 直接透传给 Yahoo，默认 5y/1d
pub async fn get_history(
    raw_symbol: &str,
    period: Option<&str>,
    interval: Option<&str>,
) -> Result<Vec<HistoryBar>> {
    let (region, canonical) = symbol::classify(raw_symbol);

    match region {
        Region::Cn => {
            let granularity = match interval {
                Some(iv) if iv != "1d" => iv,
                _ => period.unwrap_or("daily"),
            };
            eastmoney::get_history(&canonical, granularity).await
        }
        Region::Us => {
            let yahoo_symbol = symbol::to_yahoo_format(&canonical);
            yahoo::get_history(
                &yahoo_symbol,
                period.unwrap_or("5y"),
                interval.unwrap_or("1d"),
            )
            .await
        }
    }
}

/// 获取A股全市场实时快照
pub async fn get_snapshot() -> Result<Vec<SnapshotRow>> {
    eastmoney::get_snapshot().await
}

/// 获取新闻
///
/// 给定代码时按代码所属市场取个股新闻；
/// 未给代码时返回大盘快讯，region=cn 走东方财富 7×24，其余走美股大盘代理
pub async fn get_news(raw_symbol: Option<&str>, region: Option<&str>) -> Result<Vec<NewsItem>> {
    match raw_symbol {
        Some(raw) => {
            let (symbol_region, canonical) = symbol::classify(raw);
            match symbol_region {
                Region::Cn => eastmoney::get_stock_news(&canonical).await,
                Region::Us => yahoo::get_news(&canonical).await,
            }
        }
        None => match general_news_proxy(Region::parse(region)) {
            Some(proxy) => yahoo::get_news(proxy).await,
            None => eastmoney::get_telegraph_news().await,
        },
    }
}

/// 未指定个股时的快讯来源：中国市场走 7×24 电报，
/// 其余地区以 SPY 作为大盘新闻代理
fn general_news_proxy(region: Region) -> Option<&'static str> {
    match region {
        Region::Cn => None,
        Region::Us => Some("SPY"),
    }
}

/// 各地区的指数看板，(Yahoo 代码, 展示名)
fn index_table(region: Region) -> &'static [(&'static str, &'static str)] {
    match region {
        Region::Us => &[
            ("^GSPC", "S&P 500"),
            ("^DJI", "Dow Jones"),
            ("^IXIC", "Nasdaq"),
            ("^RUT", "Russell 2000"),
            ("^VIX", "VIX"),
            ("GC=F", "Gold"),
            ("CL=F", "Crude Oil"),
            ("^TNX", "10Y Treasury"),
        ],
        Region::Cn => &[
            ("000001.SS", "上证指数"),
            ("399001.SZ", "深证成指"),
            ("000300.SS", "沪深300"),
            ("^HSI", "恒生指数"),
            ("399006.SZ", "创业板指"),
            ("000688.SS", "科创50"),
            ("000905.SS", "中证500"),
            ("000016.SS", "上证50"),
        ],
    }
}

/// 获取指定地区的主要指数行情
///
/// 报价批量拉取一次，单个指数无数据时跳过而不失败
pub async fn get_markets(region: Option<&str>) -> Result<Vec<IndexQuote>> {
    let region = Region::parse(region);
    let table = index_table(region);

    let symbols: Vec<&str> = table.iter().map(|(code, _)| *code).collect();
    let quotes = yahoo::get_quotes(&symbols.join(",")).await?;

    let mut result = Vec::with_capacity(table.len());
    for (code, name) in table {
        let Some(item) = quotes
            .iter()
            .find(|q| q["symbol"].as_str() == Some(code))
        else {
            continue;
        };
        let display = display_index_symbol(region, code);
        if let Some(quote) = yahoo::parse_index_quote(item, &display, name) {
            result.push(quote);
        }
    }

    Ok(result)
}

/// 指数对外展示代码：A股指数由 .SS/.SZ 后缀形式转为 SH/SZ 规范形式，
/// 非A股代码（如恒生指数 ^HSI）原样保留
fn display_index_symbol(region: Region, code: &str) -> String {
    match region {
        Region::Cn => symbol::classify(code).1,
        Region::Us => code.to_string(),
    }
}

/// 各地区的板块代理标的，(英文板块名, Yahoo 代码)
///
/// 美股用 SPDR 行业 ETF，A股用对应主题 ETF
fn sector_table(region: Region) -> &'static [(&'static str, &'static str)] {
    match region {
        Region::Us => &[
            ("Basic Materials", "XLB"),
            ("Communication Services", "XLC"),
            ("Consumer Cyclical", "XLY"),
            ("Consumer Defensive", "XLP"),
            ("Energy", "XLE"),
            ("Financial Services", "XLF"),
            ("Healthcare", "XLV"),
            ("Industrials", "XLI"),
            ("Real Estate", "XLRE"),
            ("Technology", "XLK"),
            ("Utilities", "XLU"),
            ("Semiconductors", "SMH"),
        ],
        Region::Cn => &[
            ("Basic Materials", "512400.SS"),
            ("Communication Services", "515050.SS"),
            ("Consumer Cyclical", "510200.SS"),
            ("Consumer Defensive", "510630.SS"),
            ("Energy", "159930.SZ"),
            ("Financial Services", "510230.SS"),
            ("Healthcare", "512170.SS"),
            ("Industrials", "512660.SS"),
            ("Real Estate", "512200.SS"),
            ("Technology", "512760.SS"),
            ("Utilities", "159985.SZ"),
            ("Semiconductors", "512480.SS"),
        ],
    }
}

/// 板块英文名到中文展示名
fn translate_sector(name: &str) -> &str {
    match name {
        "Basic Materials" => "基础材料",
        "Communication Services" => "通信服务",
        "Consumer Cyclical" => "周期性消费",
        "Consumer Defensive" => "防御性消费",
        "Energy" => "能源",
        "Financial Services" => "金融服务",
        "Healthcare" => "医疗保健",
        "Industrials" => "工业",
        "Real Estate" => "房地产",
        "Technology" => "科技",
        "Utilities" => "公用事业",
        "Semiconductors" => "半导体",
        other => other,
    }
}

/// 获取指定地区的板块涨跌表现
///
/// 以各板块代理标的当日涨跌幅代表板块表现，A股板块名输出中文
pub async fn get_sectors(region: Option<&str>) -> Result<Vec<SectorPerformance>> {
    let region = Region::parse(region);
    let table = sector_table(region);

    let symbols: Vec<&str> = table.iter().map(|(_, code)| *code).collect();
    let quotes = yahoo::get_quotes(&symbols.join(",")).await?;

    let mut result = Vec::with_capacity(table.len());
    for (name, code) in table {
        let Some(item) = quotes
            .iter()
            .find(|q| q["symbol"].as_str() == Some(code))
        else {
            continue;
        };
        let Some(quote) = yahoo::parse_index_quote(item, code, name) else {
            continue;
        };

        let display_name = match region {
            Region::Cn => translate_sector(name).to_string(),
            Region::Us => name.to_string(),
        };
        let is_up = quote.change_percent >= 0.0;

        result.push(SectorPerformance {
            name: display_name,
            filter_key: name.to_string(),
            change: format!("{:+.2}%", quote.change_percent),
            is_up,
            color: if is_up { "text-green-300" } else { "text-red-300" }.to_string(),
        });
    }

    Ok(result)
}

/// 获取个股档案，A股名称用本地中文名表覆盖
pub async fn get_stock_info(raw_symbol: &str) -> Result<StockProfile> {
    let (region, canonical) = symbol::classify(raw_symbol);

    match region {
        Region::Cn => {
            let mut profile = eastmoney::get_stock_info(&canonical).await?;
            apply_name_overlay(&mut profile);
            Ok(profile)
        }
        Region::Us => {
            let yahoo_symbol = symbol::to_yahoo_format(&canonical);
            yahoo::get_stock_info(&yahoo_symbol, &canonical).await
        }
    }
}

/// 用本地名称表覆盖A股股票名，表中没有则保留数据源给的名字
fn apply_name_overlay(profile: &mut StockProfile) {
    if let Some(localized) = name_map::localized_name(&profile.symbol) {
        profile.name = localized;
    }
}

/// 把前端传来的板块名规范为 Title Case
///
/// 例如 "consumer cyclical" -> "Consumer Cyclical"
fn normalize_sector(sector: &str) -> String {
    sector
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 板块筛选，region 默认 us；sector 为空时只按地区筛选，
/// cn 结果做中文名覆盖
pub async fn get_screener(sector: &str, region: Option<&str>) -> Result<Vec<StockProfile>> {
    let sector = normalize_sector(sector);
    let region = region.unwrap_or("us").to_lowercase();

    let mut profiles = yahoo::screen(&sector, &region).await?;

    if region == "cn" {
        for profile in &mut profiles {
            apply_name_overlay(profile);
        }
    }

    Ok(profiles)
}

/// 获取财经日历
///
/// 当前为静态占位数据，后续接入真实日历源
pub fn get_events() -> Vec<EconomicEvent> {
    vec![
        EconomicEvent {
            time: "14:30".to_string(),
            country: "USA".to_string(),
            event: "CPI Data Release".to_string(),
            actual: "3.2%".to_string(),
            forecast: "3.1%".to_string(),
            impact: "High".to_string(),
        },
        EconomicEvent {
            time: "09:30".to_string(),
            country: "CN".to_string(),
            event: "Manufacturing PMI".to_string(),
            actual: "50.1".to_string(),
            forecast: "50.0".to_string(),
            impact: "Medium".to_string(),
        },
    ]
}

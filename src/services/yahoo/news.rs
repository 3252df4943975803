//! 全球市场个股新闻
//!
//! 走 Yahoo v1 search 接口，只取 news 部分，quotesCount 置 0

use anyhow::{anyhow, Result};
use reqwest::Client;

use super::common::{USER_AGENT, YF_SEARCH_API};
use crate::models::NewsItem;

/// 获取个股相关新闻，最多 20 条
pub async fn get_news(symbol: &str) -> Result<Vec<NewsItem>> {
    let client = Client::new();

    let response = client
        .get(YF_SEARCH_API)
        .query(&[("q", symbol), ("quotesCount", "0"), ("newsCount", "20")])
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("获取新闻失败: {}", response.status()));
    }

    let json_data: serde_json::Value = response.json().await?;
    Ok(parse_news_list(&json_data))
}

/// 解析 search 响应中的 news 数组
fn parse_news_list(json_data: &serde_json::Value) -> Vec<NewsItem> {
    let empty = vec![];
    let items = json_data["news"].as_array().unwrap_or(&empty);

    items
        .iter()
        .filter_map(|item| {
            let headline = item["title"].as_str()?.to_string();

            // providerPublishTime 为 Unix 秒
            let published_at = item["providerPublishTime"]
                .as_i64()
                .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default();

            let summary = match item["summary"].as_str() {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => headline.clone(),
            };

            Some(NewsItem {
                published_at,
                headline,
                url: item["link"].as_str().unwrap_or("").to_string(),
                summary,
                source: item["publisher"]
                    .as_str()
                    .unwrap_or("Yahoo Finance")
                    .to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_news_list() {
        let mock = serde_json::json!({
            "news": [
                {
                    "title": "Apple unveils new chip",
                    "link": "https://finance.yahoo.com/news/apple-chip",
                    "publisher": "Reuters",
                    "providerPublishTime": 1704204000,
                    "summary": "Apple announced its next-generation silicon."
                },
                {
                    "title": "Markets rally on tech earnings",
                    "link": "https://finance.yahoo.com/news/rally",
                    "providerPublishTime": 1704290400
                }
            ]
        });

        let news = parse_news_list(&mock);
        assert_eq!(news.len(), 2);
        assert_eq!(news[0].headline, "Apple unveils new chip");
        assert_eq!(news[0].source, "Reuters");
        assert_eq!(news[0].published_at, "2024-01-02 14:00:00");
        // 摘要缺失时回退为标题，来源缺失时回退为 Yahoo Finance
        assert_eq!(news[1].summary, "Markets rally on tech earnings");
        assert_eq!(news[1].source, "Yahoo Finance");
    }

    #[test]
    fn test_parse_news_list_empty() {
        let mock = serde_json::json!({"count": 0});
        assert!(parse_news_list(&mock).is_empty());
    }

    /// 联网冒烟测试，接口不可用时仅打印
    #[tokio::test]
    async fn test_fetch_news() {
        println!("\n========== 测试获取美股新闻 ==========");
        match get_news("AAPL").await {
            Ok(news) => {
                println!("✅ 获取成功！共 {} 条新闻", news.len());
                for item in news.iter().take(3) {
                    println!("  [{}] {} - {}", item.published_at, item.headline, item.source);
                }
            }
            Err(e) => {
                println!("❌ 获取失败: {}", e);
            }
        }
    }
}

//! 个股新闻与 7×24 快讯
//!
//! 个股新闻走东方财富搜索接口（对应 akshare 的 stock_news_em()），
//! 大盘快讯走 7×24 电报列表

use anyhow::{anyhow, Result};
use regex::Regex;
use reqwest::Client;

use super::common::{EM_NEWS_SEARCH_API, EM_TELEGRAPH_API, USER_AGENT};
use crate::models::NewsItem;
use crate::services::symbol;

/// 单次返回的新闻条数
const NEWS_PAGE_SIZE: usize = 20;

/// 获取个股新闻
pub async fn get_stock_news(canonical: &str) -> Result<Vec<NewsItem>> {
    let code = symbol::bare_code(canonical);
    let client = Client::new();

    let param = serde_json::json!({
        "uid": "",
        "keyword": code,
        "type": ["cmsArticleWebOld"],
        "client": "web",
        "clientType": "web",
        "clientVersion": "curr",
        "param": {
            "cmsArticleWebOld": {
                "searchScope": "default",
                "sort": "default",
                "pageIndex": 1,
                "pageSize": NEWS_PAGE_SIZE,
                "preTag": "<em>",
                "postTag": "</em>"
            }
        }
    });

    let response = client
        .get(EM_NEWS_SEARCH_API)
        .query(&[("cb", "jQuery_news"), ("param", param.to_string().as_str())])
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("获取个股新闻失败: {}", response.status()));
    }

    let text = response.text().await?;
    parse_search_jsonp(&text)
}

/// 解析 JSONP 包装的搜索结果
fn parse_search_jsonp(text: &str) -> Result<Vec<NewsItem>> {
    let start = text.find('(').ok_or_else(|| anyhow!("无效的 JSONP 响应"))?;
    let end = text.rfind(')').ok_or_else(|| anyhow!("无效的 JSONP 响应"))?;
    if start + 1 > end {
        return Err(anyhow!("无效的 JSONP 响应"));
    }

    let json_data: serde_json::Value = serde_json::from_str(&text[start + 1..end])
        .map_err(|e| anyhow!("解析新闻JSON失败: {}", e))?;

    let items = json_data["result"]["cmsArticleWebOld"]
        .as_array()
        .ok_or_else(|| anyhow!("新闻响应缺少 result.cmsArticleWebOld 字段"))?;

    // 标题中的搜索高亮标签需要剥掉
    let tag_re = Regex::new(r"</?em>").unwrap();

    Ok(items
        .iter()
        .map(|item| {
            let headline = tag_re
                .replace_all(item["title"].as_str().unwrap_or(""), "")
                .to_string();
            let content = item["content"].as_str().unwrap_or("");
            let summary = if content.is_empty() {
                headline.clone()
            } else {
                tag_re.replace_all(content, "").to_string()
            };

            NewsItem {
                published_at: item["date"].as_str().unwrap_or("").to_string(),
                headline,
                url: item["url"].as_str().unwrap_or("").to_string(),
                summary,
                source: item["mediaName"].as_str().unwrap_or("East Money").to_string(),
            }
        })
        .collect())
}

/// 获取 7×24 大盘快讯（未指定个股时的中国市场新闻）
pub async fn get_telegraph_news() -> Result<Vec<NewsItem>> {
    let client = Client::new();

    let response = client
        .get(EM_TELEGRAPH_API)
        .query(&[
            ("client", "web"),
            ("biz", "web_724"),
            ("column", "102"),
            ("order", "1"),
            ("needInteractData", "0"),
            ("page_index", "1"),
            ("page_size", "20"),
        ])
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("获取快讯失败: {}", response.status()));
    }

    let json_data: serde_json::Value = response.json().await?;
    parse_telegraph_list(&json_data)
}

/// 解析快讯列表
fn parse_telegraph_list(json_data: &serde_json::Value) -> Result<Vec<NewsItem>> {
    let items = json_data["data"]["list"]
        .as_array()
        .ok_or_else(|| anyhow!("快讯响应缺少 data.list 字段"))?;

    Ok(items
        .iter()
        .map(|item| {
            let title = item["title"].as_str().unwrap_or("");
            let digest = item["digest"].as_str().unwrap_or("");
            // 快讯经常没有独立标题，此时用正文充当
            let headline = if title.is_empty() { digest } else { title };

            NewsItem {
                published_at: item["showTime"].as_str().unwrap_or("").to_string(),
                headline: headline.to_string(),
                url: item["uniqueUrl"].as_str().unwrap_or("").to_string(),
                summary: if digest.is_empty() {
                    headline.to_string()
                } else {
                    digest.to_string()
                },
                source: "East Money".to_string(),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_jsonp() {
        let mock = r#"jQuery_news({"result":{"cmsArticleWebOld":[
            {"title":"<em>贵州茅台</em>发布年报","date":"2024-04-02 18:30:00",
             "url":"https://finance.eastmoney.com/a/1.html",
             "content":"公司实现营业收入增长","mediaName":"证券时报"},
            {"title":"白酒板块走强","date":"2024-04-03 09:45:00",
             "url":"https://finance.eastmoney.com/a/2.html",
             "content":"","mediaName":"东方财富网"}
        ]}})"#;

        let items = parse_search_jsonp(mock).unwrap();
        assert_eq!(items.len(), 2);
        // 高亮标签被剥掉
        assert_eq!(items[0].headline, "贵州茅台发布年报");
        assert_eq!(items[0].source, "证券时报");
        // 无摘要时回落为标题
        assert_eq!(items[1].summary, "白酒板块走强");
    }

    #[test]
    fn test_parse_search_jsonp_invalid() {
        assert!(parse_search_jsonp("garbage without parens").is_err());
        assert!(parse_search_jsonp("cb({\"result\":{}})").is_err());
    }

    #[test]
    fn test_parse_telegraph_list() {
        let mock = serde_json::json!({
            "data": {
                "list": [
                    {"title": "", "digest": "两市成交额突破一万亿元",
                     "showTime": "2024-04-03 10:00:00", "uniqueUrl": ""},
                    {"title": "央行公开市场操作", "digest": "今日开展100亿元逆回购",
                     "showTime": "2024-04-03 09:20:00",
                     "uniqueUrl": "https://finance.eastmoney.com/a/3.html"}
                ]
            }
        });

        let items = parse_telegraph_list(&mock).unwrap();
        assert_eq!(items.len(), 2);
        // 无标题的快讯用正文充当标题
        assert_eq!(items[0].headline, "两市成交额突破一万亿元");
        assert_eq!(items[1].headline, "央行公开市场操作");
        assert_eq!(items[1].summary, "今日开展100亿元逆回购");
    }

    /// 联网冒烟测试，接口不可用时仅打印
    #[tokio::test]
    async fn test_fetch_stock_news() {
        println!("\n========== 测试获取个股新闻 ==========");
        match get_stock_news("SH600519").await {
            Ok(items) => {
                println!("✅ 获取成功！共 {} 条", items.len());
                for item in items.iter().take(3) {
                    println!("  [{}] {}", item.published_at, item.headline);
                }
            }
            Err(e) => {
                println!("❌ 获取失败: {}", e);
            }
        }
    }
}

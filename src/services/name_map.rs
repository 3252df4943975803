//! A股名称映射表
//!
//! 进程启动时从 JSON 文件加载一次（规范代码 -> 本地化名称），此后只读。
//! 文件缺失或解析失败只记录警告，服务照常启动，表为空。

use std::collections::HashMap;
use std::fs;
use std::sync::OnceLock;

use crate::services::symbol;

static SYMBOL_TO_NAME: OnceLock<HashMap<String, String>> = OnceLock::new();

/// 启动时加载名称映射表，重复调用不生效
pub fn init(path: &str) {
    let map = match load_from_file(path) {
        Ok(map) => {
            log::info!("名称映射表加载完成，共 {} 条", map.len());
            map
        }
        Err(e) => {
            log::warn!("加载名称映射表 {} 失败: {}", path, e);
            HashMap::new()
        }
    };

    if SYMBOL_TO_NAME.set(map).is_err() {
        log::warn!("名称映射表已初始化，忽略重复加载");
    }
}

/// 查询本地化名称：先按规范代码精确匹配，未命中再尝试6位裸代码
///
/// 未命中返回 None，调用方保留数据源原始名称，不作为错误处理
pub fn localized_name(canonical: &str) -> Option<String> {
    let map = SYMBOL_TO_NAME.get()?;
    if let Some(name) = map.get(canonical) {
        return Some(name.clone());
    }
    map.get(symbol::bare_code(canonical)).cloned()
}

fn load_from_file(path: &str) -> anyhow::Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)?;
    parse_map(&content)
}

fn parse_map(content: &str) -> anyhow::Result<HashMap<String, String>> {
    let map = serde_json::from_str(content)?;
    Ok(map)
}

/// 测试用初始化：进程内只会生效一次，各测试使用同一份数据
#[cfg(test)]
pub(crate) fn init_for_tests() {
    let _ = SYMBOL_TO_NAME.get_or_init(|| {
        let mut map = HashMap::new();
        map.insert("SH600519".to_string(), "贵州茅台".to_string());
        map.insert("601318".to_string(), "中国平安".to_string());
        map.insert("SZ000001".to_string(), "平安银行".to_string());
        map
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map() {
        let content = r#"{"SH600519": "贵州茅台", "600519": "贵州茅台"}"#;
        let map = parse_map(content).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("SH600519").map(String::as_str), Some("贵州茅台"));
    }

    #[test]
    fn test_parse_map_invalid_json() {
        assert!(parse_map("not json").is_err());
        assert!(parse_map(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn test_localized_name_lookup() {
        init_for_tests();

        // 规范代码精确命中
        assert_eq!(localized_name("SH600519"), Some("贵州茅台".to_string()));
        // 规范代码未命中时回落到裸代码
        assert_eq!(localized_name("SH601318"), Some("中国平安".to_string()));
        // 未命中不是错误
        assert_eq!(localized_name("SH688981"), None);
        assert_eq!(localized_name("AAPL"), None);
    }
}

//! 代码归类与转换
//!
//! 识别原始代码属于A股还是全球市场，并产出各数据源要求的形式。
//! 这是全部路由决策的唯一入口：沪深段规则只在这里出现，
//! 调整交易所数字段不需要改动任何路由代码。

/// 市场区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// 全球/美股市场
    Us,
    /// 中国A股市场
    Cn,
}

impl Region {
    /// 解析 region 查询参数，大小写不敏感，无法识别时回落到 us
    pub fn parse(s: Option<&str>) -> Self {
        match s.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "cn" => Region::Cn,
            _ => Region::Us,
        }
    }
}

/// 归类原始代码，返回（区域，规范形式）
///
/// 规范形式：A股为 SH/SZ + 6位数字（如 SH601318），全球市场代码原样透传。
/// 已带交易所前缀或 Yahoo 后缀的代码不会被二次加前缀（重复归类幂等）。
/// 不校验代码是否真实存在，无效代码由数据源报错。
pub fn classify(raw: &str) -> (Region, String) {
    let symbol = raw.trim().to_uppercase();

    // Yahoo 后缀形式：601318.SS / 000001.SZ
    if let Some(code) = symbol.strip_suffix(".SS") {
        if is_six_digits(code) {
            return (Region::Cn, format!("SH{}", code));
        }
    }
    if let Some(code) = symbol.strip_suffix(".SZ") {
        if is_six_digits(code) {
            return (Region::Cn, format!("SZ{}", code));
        }
    }

    // 已是规范形式
    if is_canonical_cn(&symbol) {
        return (Region::Cn, symbol);
    }

    // 纯数字代码归A股，按沪深数字段加前缀
    if is_digits(&symbol) {
        if is_shanghai_code(&symbol) {
            return (Region::Cn, format!("SH{}", symbol));
        }
        return (Region::Cn, format!("SZ{}", symbol));
    }

    // 其余按全球市场处理，原样透传
    (Region::Us, symbol)
}

/// 转换为 Yahoo Finance 代码形式
///
/// SH601318 -> 601318.SS，SZ000001 -> 000001.SZ，
/// 纯6位数字按沪深段加后缀，其余（含已带后缀的）原样返回。
pub fn to_yahoo_format(raw: &str) -> String {
    let symbol = raw.trim().to_uppercase();

    if symbol.ends_with(".SS") || symbol.ends_with(".SZ") {
        return symbol;
    }

    if is_canonical_cn(&symbol) {
        if let Some(code) = symbol.strip_prefix("SH") {
            return format!("{}.SS", code);
        }
        if let Some(code) = symbol.strip_prefix("SZ") {
            return format!("{}.SZ", code);
        }
    }

    if is_six_digits(&symbol) {
        if is_shanghai_code(&symbol) {
            return format!("{}.SS", symbol);
        }
        return format!("{}.SZ", symbol);
    }

    symbol
}

/// 去掉 SH/SZ 前缀，得到东方财富接口所需的6位数字代码
pub fn bare_code(canonical: &str) -> &str {
    if is_canonical_cn(canonical) {
        &canonical[2..]
    } else {
        canonical
    }
}

/// 东方财富行情 secid：沪市 1.xxxxxx，深市 0.xxxxxx
pub fn em_secid(canonical: &str) -> String {
    let code = bare_code(canonical);
    if canonical.starts_with("SH") || is_shanghai_code(code) {
        format!("1.{}", code)
    } else {
        format!("0.{}", code)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_six_digits(s: &str) -> bool {
    s.len() == 6 && is_digits(s)
}

/// 是否已是规范形式（SH/SZ + 6位数字）
fn is_canonical_cn(s: &str) -> bool {
    s.len() == 8
        && (s.starts_with("SH") || s.starts_with("SZ"))
        && is_six_digits(&s[2..])
}

/// 沪市数字段：6 开头主板、9 开头B股、5 开头基金，其余归深市
fn is_shanghai_code(code: &str) -> bool {
    code.starts_with('6') || code.starts_with('9') || code.starts_with('5')
}

//! 业务逻辑服务
//!
//! market_service 为对外路由层，eastmoney/yahoo 为两个数据源适配器，
//! symbol 和 name_map 为共用的代码归类与名称覆盖工具

pub mod eastmoney;
pub mod market_service;
pub mod name_map;
pub mod symbol;
pub mod yahoo;

use actix_web::{web, HttpResponse, Result};

use crate::models::{
    ApiResponse, EconomicEvent, HistoryBar, HistoryQuery, IndexQuote, MarketsQuery, NewsItem,
    NewsQuery, ScreenerQuery, SectorPerformance, SectorsQuery, SnapshotRow, StockProfile,
};
use crate::services::market_service;

pub async fn get_history(query: web::Query<HistoryQuery>) -> Result<HttpResponse> {
    match market_service::get_history(
        &query.symbol,
        query.period.as_deref(),
        query.interval.as_deref(),
    )
    .await
    {
        Ok(bars) => {
            let response = ApiResponse::success(bars);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            let response = ApiResponse::<Vec<HistoryBar>>::error(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub async fn get_snapshot() -> Result<HttpResponse> {
    match market_service::get_snapshot().await {
        Ok(rows) => {
            let response = ApiResponse::success(rows);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            let response = ApiResponse::<Vec<SnapshotRow>>::error(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub async fn get_news(query: web::Query<NewsQuery>) -> Result<HttpResponse> {
    match market_service::get_news(query.symbol.as_deref(), query.region.as_deref()).await {
        Ok(news) => {
            let response = ApiResponse::success(news);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            let response = ApiResponse::<Vec<NewsItem>>::error(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub async fn get_markets(query: web::Query<MarketsQuery>) -> Result<HttpResponse> {
    match market_service::get_markets(query.region.as_deref()).await {
        Ok(quotes) => {
            let response = ApiResponse::success(quotes);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            let response = ApiResponse::<Vec<IndexQuote>>::error(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub async fn get_sectors(query: web::Query<SectorsQuery>) -> Result<HttpResponse> {
    match market_service::get_sectors(query.region.as_deref()).await {
        Ok(sectors) => {
            let response = ApiResponse::success(sectors);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            let response = ApiResponse::<Vec<SectorPerformance>>::error(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub async fn get_stock_info(path: web::Path<String>) -> Result<HttpResponse> {
    let symbol = path.into_inner();

    match market_service::get_stock_info(&symbol).await {
        Ok(profile) => {
            let response = ApiResponse::success(profile);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            let response = ApiResponse::<StockProfile>::error(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub async fn get_screener(query: web::Query<ScreenerQuery>) -> Result<HttpResponse> {
    let sector = query.sector.as_deref().unwrap_or("");

    match market_service::get_screener(sector, query.region.as_deref()).await {
        Ok(profiles) => {
            let response = ApiResponse::success(profiles);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            let response = ApiResponse::<Vec<StockProfile>>::error(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub async fn get_events() -> Result<HttpResponse> {
    let events: Vec<EconomicEvent> = market_service::get_events();
    let response = ApiResponse::success(events);
    Ok(HttpResponse::Ok().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/history", web::get().to(get_history))
        .route("/snapshot", web::get().to(get_snapshot))
        .route("/news", web::get().to(get_news))
        .route("/markets", web::get().to(get_markets))
        .route("/sectors", web::get().to(get_sectors))
        .route("/info/{symbol}", web::get().to(get_stock_info))
        .route("/screener", web::get().to(get_screener))
        .route("/events", web::get().to(get_events));
}

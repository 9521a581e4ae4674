use crate::dashboard::{extremal_models, ChartCriterion, Dashboard, Extreme};
use crate::errors::ServerError;
use crate::responses::{html_response, xlsx_response, ResultResp};
use crate::spreadsheets::ranked_workbook;
use crate::templates::components::{bar_chart, brand_details, model_image};
use crate::templates::pages::{dashboard_page, DashboardVm};
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, dashboard: &Dashboard) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    match (method, path) {
        ("GET", "/") => home(dashboard),
        ("GET", "/brand") => brand(dashboard, &params),
        ("GET", "/image") => image(dashboard, &params),
        ("GET", "/chart") => chart(dashboard, &params),
        ("GET", "/download") => download(dashboard),
        _ => Err(ServerError::NotFound),
    }
}

fn home(dashboard: &Dashboard) -> ResultResp {
    let listings = dashboard.listings()?;
    let brands = dashboard.brands()?;
    let selected_brand = brands.first().copied();
    let brand_listings = match selected_brand {
        Some(brand) => dashboard.brand_listings(brand)?,
        None => Vec::new(),
    };

    let criterion = ChartCriterion::Price;
    let extreme = Extreme::Min;
    let bars = extremal_models(listings, criterion, extreme, &dashboard.currency);

    let vm = DashboardVm {
        top_n: dashboard.models_per_brand()?,
        listings,
        brands,
        selected_brand,
        brand_listings,
        criterion,
        extreme,
        bars,
        source: dashboard.source.display().to_string(),
        loaded_at: dashboard.loaded_at.format("%Y-%m-%d %H:%M").to_string(),
    };

    html_response(dashboard_page(&vm))
}

fn brand(dashboard: &Dashboard, params: &HashMap<String, String>) -> ResultResp {
    let brand = required(params, "brand")?;
    if !dashboard.brands()?.contains(&brand) {
        return Err(ServerError::BadRequest(format!("Unknown brand '{brand}'")));
    }

    let listings = dashboard.brand_listings(brand)?;
    html_response(brand_details(brand, &listings))
}

fn image(dashboard: &Dashboard, params: &HashMap<String, String>) -> ResultResp {
    let model = required(params, "model")?;
    let lookup = dashboard.images.resolve(model);
    html_response(model_image(model, &lookup))
}

fn chart(dashboard: &Dashboard, params: &HashMap<String, String>) -> ResultResp {
    let listings = dashboard.listings()?;
    let criterion = ChartCriterion::parse(required(params, "criterion")?)?;
    let extreme = Extreme::parse(params.get("kind").map(String::as_str).unwrap_or("min"))?;

    let bars = extremal_models(listings, criterion, extreme, &dashboard.currency);
    html_response(bar_chart(criterion, extreme, &bars))
}

fn download(dashboard: &Dashboard) -> ResultResp {
    let listings = dashboard.listings()?;

    let buffer = ranked_workbook(listings, &dashboard.currency)
        .and_then(|mut workbook| workbook.save_to_buffer())
        .map_err(|e| ServerError::XlsxError(format!("Failed to build workbook: {e}")))?;

    let filename = dashboard
        .source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "top_models.xlsx".to_string());

    xlsx_response(buffer, &filename)
}

fn required<'a>(params: &'a HashMap<String, String>, key: &str) -> Result<&'a str, ServerError> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("Missing query parameter '{key}'")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

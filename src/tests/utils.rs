use crate::dashboard::Dashboard;
use crate::db::{init_db, Database};
use crate::domain::{Cell, Column, NormalizedListing, RawListing, ScoredListing};
use crate::spreadsheets::write_ranked_xlsx;
use crate::images::{ImageResolver, ImageSearch, SearchError};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Unique name per call, safe across parallel tests.
fn unique(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}_{nanos}_{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Workbook path in the temp dir, removed on drop.
pub struct TempXlsx(PathBuf);

impl TempXlsx {
    pub fn new(prefix: &str) -> Self {
        Self(std::env::temp_dir().join(format!("{}.xlsx", unique(prefix))))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempXlsx {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

/// Fresh shared in-memory image cache with the production schema.
pub fn init_test_cache() -> Database {
    let db = Database::new(format!("file:{}?mode=memory&cache=shared", unique("image_cache")));
    init_db(&db).unwrap_or_else(|e| panic!("Image cache initialization failed: {e}"));
    db
}

/// Raw row with every numeric field filled in.
pub fn phone(
    brand: &str,
    model: &str,
    price: f64,
    battery: f64,
    ram: f64,
    rom: f64,
    speed: f64,
    front: f64,
    rear: f64,
) -> RawListing {
    RawListing::default()
        .with(Column::BrandName, Cell::Text(brand.into()))
        .with(Column::Model, Cell::Text(model.into()))
        .with(Column::Chipset, Cell::Text("snapdragon".into()))
        .with(Column::Price, Cell::Number(price))
        .with(Column::BatteryCapacity, Cell::Number(battery))
        .with(Column::Ram, Cell::Number(ram))
        .with(Column::Rom, Cell::Number(rom))
        .with(Column::ProcessorSpeed, Cell::Number(speed))
        .with(Column::FrontCamera, Cell::Number(front))
        .with(Column::RearCamera, Cell::Number(rear))
}

/// Writes a raw sales workbook. Headers are padded with spaces and written in
/// a shuffled order to exercise trimming and lookup by name.
pub fn write_raw_workbook(path: &Path, columns: &[Column], rows: &[RawListing]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sales").unwrap();

    for (col, column) in columns.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, format!(" {} ", column.source()))
            .unwrap();
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, column) in columns.iter().enumerate() {
            match row.get(*column) {
                Some(Cell::Text(text)) => worksheet.write_string(r, col as u16, text).unwrap(),
                Some(Cell::Number(value)) => worksheet.write_number(r, col as u16, *value).unwrap(),
                None => continue,
            };
        }
    }

    workbook.save(path).unwrap();
}

/// Ranked row with the fields the dashboard shows.
pub fn scored(brand: &str, model: &str, price: &str, battery: &str, score: f64, rating: u8) -> ScoredListing {
    let values = [
        brand, model, "Snapdragon", "2.2 GHz", battery, price, "8 GB", "128 GB", "16", "50",
    ]
    .map(String::from);

    ScoredListing {
        listing: NormalizedListing { values },
        score,
        normalized_score: (rating as f64 - 1.0) / 4.0,
        rating,
    }
}

/// Writes a small ranked workbook: two Nothing models and two Poco models.
pub fn write_ranked_fixture(path: &Path) {
    let rows = vec![
        scored("Nothing", "CMF Phone 1", "₹16,000.00", "5000 mAh", -10795.5, 5),
        scored("Nothing", "Phone (2)", "₹30,000.00", "4500 mAh", -25295.8, 1),
        scored("Poco", "C65", "₹7,000.00", "5000 mAh", -1808.0, 5),
        scored("Poco", "M6", "₹8,000.00", "5030 mAh", -2775.8, 4),
    ];
    write_ranked_xlsx(&rows, path, "₹").unwrap();
}

/// Search double that counts calls and returns a fixed answer.
pub struct FakeSearch {
    pub calls: Arc<AtomicUsize>,
    answer: Result<Option<String>, u16>,
}

impl FakeSearch {
    pub fn found(url: &str) -> Self {
        Self::with_answer(Ok(Some(url.to_string())))
    }

    pub fn empty() -> Self {
        Self::with_answer(Ok(None))
    }

    pub fn failing(status: u16) -> Self {
        Self::with_answer(Err(status))
    }

    fn with_answer(answer: Result<Option<String>, u16>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            answer,
        }
    }
}

impl ImageSearch for FakeSearch {
    fn first_image(&self, _query: &str) -> Result<Option<String>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Ok(answer) => Ok(answer.clone()),
            Err(status) => Err(SearchError::Api {
                status: *status,
                body: "quota exceeded".to_string(),
            }),
        }
    }
}

pub fn resolver(search: FakeSearch) -> ImageResolver {
    ImageResolver::new(Box::new(search), init_test_cache())
}

/// Dashboard over the ranked workbook at `path`.
pub fn load_dashboard(path: &Path, search: FakeSearch) -> Dashboard {
    Dashboard::load(path, resolver(search), "₹")
}

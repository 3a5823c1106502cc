/// CSV export for collection snapshots
use contracts::domain::a001_expense::record::Expense;
use contracts::domain::a002_egg_log::record::EggLog;
use contracts::shared::csv::csv_text;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// A record kind that can be exported to CSV
pub trait CsvExportable {
    /// Fixed column header
    fn headers() -> Vec<&'static str>;

    /// One data row from the selected fields
    fn to_csv_row(&self) -> Vec<String>;
}

impl CsvExportable for Expense {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Category", "Amount", "Notes"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.category.clone(),
            self.amount.to_string(),
            self.notes.clone(),
        ]
    }
}

impl CsvExportable for EggLog {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Shed", "Collected", "Broken"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.shed.clone(),
            self.collected.to_string(),
            self.broken.to_string(),
        ]
    }
}

/// Build the CSV text from a point-in-time snapshot and hand it to the
/// browser download mechanism
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(data.len() + 1);
    rows.push(T::headers().into_iter().map(String::from).collect());
    for item in data {
        rows.push(item.to_csv_row());
    }

    let blob = create_csv_blob(&csv_text(&rows))?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

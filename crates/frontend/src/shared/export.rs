/// Скачивание файлов, полученных от backend (CSV и т.п.)
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Куда сохраняется готовый файл
pub trait FileSaver {
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), String>;
}

/// Сохраняет файл через временную ссылку `<a download>`
#[derive(Clone, Copy, Default)]
pub struct BrowserFileSaver;

impl FileSaver for BrowserFileSaver {
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
        let blob = create_blob(bytes, mime)?;
        download_blob(&blob, filename)
    }
}

/// Object URL, который освобождается при выходе из области видимости
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> Result<Self, String> {
        Url::create_object_url_with_blob(blob)
            .map(ObjectUrl)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed to revoke object URL {}: {:?}", self.0, e);
        }
    }
}

/// Создает Blob из байтов ответа
fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    // URL отзывается при любом исходе, как только он создан
    let url = ObjectUrl::for_blob(blob)?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url.0);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    // Добавляем в DOM, кликаем и удаляем
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}

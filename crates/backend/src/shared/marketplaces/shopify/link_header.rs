//! Разбор заголовка `Link` с курсором пагинации Shopify
//!
//! Пример значения:
//! `<https://shop/admin/api/2024-01/products.json?page_info=abc>; rel="previous", <https://shop/...page_info=def>; rel="next"`

/// URL следующей страницы из заголовка `Link`, если он есть
pub fn next_page_url(link_header: Option<&str>) -> Option<String> {
    let header = link_header?;
    if header.is_empty() {
        return None;
    }

    for link in header.split(',') {
        let parts: Vec<&str> = link.split(';').collect();
        if parts.len() == 2 && parts[1].trim().eq_ignore_ascii_case("rel=\"next\"") {
            let url = parts[0].trim_matches(|c: char| c == '<' || c == '>' || c == ' ');
            return Some(url.to_string());
        }
    }

    None
}

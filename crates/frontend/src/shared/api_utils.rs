//! Построение URL для запросов к backend

/// Порт backend, см. `[server] port` в config.toml
pub const API_PORT: u16 = 3000;

/// `<protocol>//<hostname>:3000` из текущего window.location
///
/// Пустая строка, если window недоступен.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Полный URL для пути API, например `/api/lost`
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// URL одного элемента коллекции, например `/api/lost/<id>`
pub fn api_item_url(collection_path: &str, id: &str) -> String {
    api_url(&format!("{}/{}", collection_path.trim_end_matches('/'), id))
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), path)
    } else {
        format!("{}/{}", base.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000", "/api/lost"),
            "http://localhost:3000/api/lost"
        );
        assert_eq!(
            join_url("http://localhost:3000/", "api/lost"),
            "http://localhost:3000/api/lost"
        );
        assert_eq!(join_url("", "/api/lost"), "/api/lost");
    }
}

use axum::Json;
use axum_extra::extract::CookieJar;
use cookie::Cookie;
use serde_json::{Map, Value, json};

/// Echoes the request cookies and plants two example ones.
pub async fn dark_mode(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let seen: Map<String, Value> = jar
        .iter()
        .map(|cookie| (cookie.name().to_string(), Value::String(cookie.value().to_string())))
        .collect();

    let jar = jar
        .add(Cookie::new("password", "pa$$w0rd"))
        .add(Cookie::new("mode", "dark"));
    (jar, Json(json!({ "cookies": [seen] })))
}

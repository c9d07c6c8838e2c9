#![no_main]

use docsearch_web::WebSession;
use libfuzzer_sys::fuzz_target;

const CATALOG: &str = r#"[
    {"name": "CreateOrder", "type": "command", "uri": "/a"},
    {"name": "OrderCreated", "type": "event", "uri": "/b"},
    {"name": "Shipping Process", "type": "process", "uri": "/c"}
]"#;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut session = WebSession::new();
    if session.load_catalog_json(CATALOG).is_err() {
        return;
    }
    // Records separated by newlines form one session.
    for line in text.lines().take(256) {
        let _ = session.dispatch_json(line);
    }
    let _ = session.load_catalog_json(text);
});

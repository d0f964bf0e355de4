//! Static control page.

/// Control page served at `/`. The button POSTs to `/shutdown`.
pub const CONTROL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Server Control</title>
</head>
<body>
    <form action="/shutdown" method="post">
        <button type="submit">Shutdown Server</button>
    </form>
</body>
</html>
"#;
